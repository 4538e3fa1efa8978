use marbletree_scenario::ScenarioSpec;

fn main() {
    let scenario = ScenarioSpec::from_default_yaml()
        .expect("default scenario should parse")
        .compile()
        .expect("default scenario should compile");
    let mut session = scenario.session();
    let root_id = session.current_tree().id();

    println!("offered at root:");
    for choice in session.available_questions(root_id) {
        println!("  [{}] {}", choice.key, choice.prompt);
    }

    session
        .request_split(root_id, "size")
        .expect("size split should apply");
    let big_id = session
        .current_tree()
        .yes_child_id()
        .expect("root was split");
    session
        .request_split(big_id, "texture")
        .expect("texture split should apply");

    println!("completed splits: {}", session.completed_splits());
    println!(
        "{}",
        session
            .snapshot()
            .to_json()
            .expect("snapshot should serialize")
    );

    session.undo();
    println!("after undo: {} splits", session.completed_splits());
    session.redo();
    println!("after redo: {} splits", session.completed_splits());
}
