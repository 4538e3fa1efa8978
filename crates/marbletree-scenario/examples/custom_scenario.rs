use marbletree_core::{AttributeTest, Color, Size, Texture};
use marbletree_scenario::ScenarioBuilder;

fn main() {
    let mut builder = ScenarioBuilder::new();
    builder
        .add_item(1, Color::Red, Size::Big, Texture::Smooth, 12)
        .add_item(2, Color::Red, Size::Small, Texture::Rough, 3)
        .add_item(3, Color::Blue, Size::Big, Texture::Rough, 9)
        .add_item(4, Color::Blue, Size::Small, Texture::Smooth, 5);
    builder
        .add_question("size", "Is it large?", AttributeTest::SizeIs(Size::Big))
        .add_gated_question(
            "color",
            "Is it red?",
            AttributeTest::ColorIs(Color::Red),
            1,
        );

    let scenario = builder.compile().expect("scenario should compile");
    let mut session = scenario.session();
    let root_id = session.current_tree().id();

    session
        .request_split(root_id, "size")
        .expect("size split should apply");

    let children = [
        session.current_tree().yes_child_id(),
        session.current_tree().no_child_id(),
    ];
    for node_id in children.into_iter().flatten() {
        let offered: Vec<String> = session
            .available_questions(node_id)
            .into_iter()
            .map(|choice| choice.key)
            .collect();
        println!("node {} offers {:?}", node_id.value(), offered);
    }
}
