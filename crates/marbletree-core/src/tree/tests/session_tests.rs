use crate::{
    AttributeTest, Color, Item, ItemId, NodeId, Question, QuestionLibrary, Session, Size,
    SplitError, Texture,
};

fn marble(id: u32, color: Color, size: Size, texture: Texture, weight: u32) -> Item {
    Item::new(ItemId::from(id), color, size, texture, weight)
}

fn marbles() -> Vec<Item> {
    vec![
        marble(1, Color::Red, Size::Big, Texture::Smooth, 20),
        marble(2, Color::Red, Size::Big, Texture::Rough, 2),
        marble(3, Color::Red, Size::Big, Texture::Smooth, 19),
        marble(4, Color::Red, Size::Big, Texture::Rough, 17),
        marble(5, Color::Red, Size::Small, Texture::Smooth, 4),
        marble(6, Color::Red, Size::Small, Texture::Rough, 10),
        marble(7, Color::Blue, Size::Small, Texture::Smooth, 15),
        marble(8, Color::Blue, Size::Small, Texture::Rough, 3),
        marble(9, Color::Blue, Size::Small, Texture::Smooth, 18),
        marble(10, Color::Blue, Size::Small, Texture::Rough, 2),
        marble(11, Color::Blue, Size::Big, Texture::Smooth, 26),
        marble(12, Color::Blue, Size::Big, Texture::Rough, 7),
    ]
}

fn library() -> QuestionLibrary {
    QuestionLibrary::new(vec![
        Question::gated("color", "Is it red?", AttributeTest::ColorIs(Color::Red), 2),
        Question::new("size", "Is it large?", AttributeTest::SizeIs(Size::Big)),
        Question::new("texture", "Is it rough?", AttributeTest::TextureIs(Texture::Rough)),
        Question::new(
            "weight",
            "Is it heavy (>=15kg)?",
            AttributeTest::WeightAtLeast(15),
        ),
    ])
}

fn session() -> Session {
    Session::new(marbles(), library())
}

fn offered_keys(session: &Session, node_id: NodeId) -> Vec<String> {
    session
        .available_questions(node_id)
        .into_iter()
        .map(|choice| choice.key)
        .collect()
}

#[test]
fn color_question_is_gated_until_two_splits() {
    let mut session = session();
    let root_id = session.current_tree().id();

    assert_eq!(offered_keys(&session, root_id), ["size", "texture", "weight"]);

    session.request_split(root_id, "size").expect("size split should apply");
    let yes_id = session.current_tree().yes_child_id().expect("root was split");
    let no_id = session.current_tree().no_child_id().expect("root was split");

    // One split completed: still locked everywhere.
    assert_eq!(offered_keys(&session, yes_id), ["size", "texture", "weight"]);

    session
        .request_split(yes_id, "texture")
        .expect("texture split should apply");

    // Two splits anywhere in the tree unlock the color question.
    assert_eq!(session.completed_splits(), 2);
    assert_eq!(
        offered_keys(&session, no_id),
        ["color", "size", "texture", "weight"]
    );
}

#[test]
fn no_questions_for_pure_split_or_missing_nodes() {
    let mut session = Session::new(
        vec![
            marble(1, Color::Red, Size::Big, Texture::Smooth, 10),
            marble(2, Color::Red, Size::Big, Texture::Rough, 12),
            marble(3, Color::Blue, Size::Small, Texture::Smooth, 5),
        ],
        library(),
    );
    let root_id = session.current_tree().id();

    session.request_split(root_id, "size").expect("size split should apply");

    // The split node itself is no longer offered anything.
    assert!(session.available_questions(root_id).is_empty());

    // Both children are pure leaves now.
    let yes_id = session.current_tree().yes_child_id().expect("root was split");
    let no_id = session.current_tree().no_child_id().expect("root was split");
    assert!(session.available_questions(yes_id).is_empty());
    assert!(session.available_questions(no_id).is_empty());

    assert!(session.available_questions(NodeId::from(99)).is_empty());
}

#[test]
fn unknown_question_is_rejected_without_touching_history() {
    let mut session = session();
    let root_id = session.current_tree().id();

    let err = session
        .request_split(root_id, "shape")
        .expect_err("unregistered key must be rejected");
    assert_eq!(
        err,
        SplitError::UnknownQuestion {
            key: "shape".to_string()
        }
    );
    assert_eq!(session.history().len(), 1);
    assert!(session.current_tree().is_leaf());
}

#[test]
fn degenerate_request_leaves_history_untouched() {
    let mut session = Session::new(
        vec![
            marble(1, Color::Red, Size::Big, Texture::Smooth, 10),
            marble(2, Color::Blue, Size::Big, Texture::Rough, 12),
        ],
        library(),
    );
    let root_id = session.current_tree().id();

    let err = session
        .request_split(root_id, "size")
        .expect_err("one-sided split must be rejected");
    assert!(matches!(err, SplitError::DegenerateSplit { .. }));

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().cursor(), 0);
    assert!(session.current_tree().is_leaf());
}

#[test]
fn missing_node_is_rejected() {
    let mut session = session();

    let err = session
        .request_split(NodeId::from(99), "size")
        .expect_err("missing node must be rejected");
    assert_eq!(
        err,
        SplitError::NodeNotFound {
            node_id: NodeId::from(99)
        }
    );
    assert_eq!(session.history().len(), 1);
}

#[test]
fn undo_and_redo_walk_the_session_history() {
    let mut session = session();
    let root_id = session.current_tree().id();

    session.request_split(root_id, "size").expect("size split should apply");
    let after_split = session.current_tree().clone();

    assert!(session.undo().is_leaf());
    assert_eq!(session.completed_splits(), 0);
    assert_eq!(session.redo(), &after_split);

    // A fresh split after undo discards the redo branch for good.
    session.undo();
    session
        .request_split(root_id, "texture")
        .expect("texture split should apply");
    let after_texture = session.current_tree().clone();

    assert_eq!(session.redo(), &after_texture);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.current_tree().question(), Some("texture"));
}

#[test]
fn inspect_looks_items_up_without_changing_state() {
    let session = session();

    let found = session.inspect(ItemId::from(7)).expect("item 7 exists");
    assert_eq!(found.color(), Color::Blue);
    assert_eq!(found.weight(), 15);

    assert!(session.inspect(ItemId::from(99)).is_none());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn snapshot_flattens_the_current_tree() {
    let mut session = session();
    let root_id = session.current_tree().id();
    session.request_split(root_id, "size").expect("size split should apply");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.node_count, 3);
    assert_eq!(snapshot.completed_splits, 1);
    assert_eq!(snapshot.root_node_id, root_id.value());

    let root = &snapshot.nodes[0];
    assert_eq!(root.question_key.as_deref(), Some("size"));
    assert_eq!(root.question_prompt.as_deref(), Some("Is it large?"));
    assert_eq!(root.red_count, 6);
    assert_eq!(root.blue_count, 6);
    assert_eq!(root.gini, 0.5);
    assert_eq!(root.yes_child_id, Some(2));
    assert_eq!(root.no_child_id, Some(3));

    // Depth first: yes child right after the root.
    assert_eq!(snapshot.nodes[1].node_id, 2);
    assert_eq!(snapshot.nodes[1].item_ids, [1, 2, 3, 4, 11, 12]);

    let json = snapshot.to_json().expect("snapshot should serialize");
    assert!(json.contains("\"schema_version\":1"));
}
