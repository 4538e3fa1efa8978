use serde::Serialize;

use crate::tree::impurity::{class_counts, gini};
use crate::tree::node::Node;
use crate::tree::question::QuestionLibrary;

/// Version stamp for downstream consumers of the snapshot schema.
const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
/// Flat render-ready view of one tree snapshot.
pub struct TreeSnapshot {
    pub schema_version: u32,
    pub root_node_id: u64,
    pub node_count: usize,
    pub completed_splits: usize,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub node_id: u64,
    pub item_ids: Vec<u32>,
    pub red_count: usize,
    pub blue_count: usize,
    pub gini: f64,
    pub question_key: Option<String>,
    pub question_prompt: Option<String>,
    pub yes_child_id: Option<u64>,
    pub no_child_id: Option<u64>,
}

impl TreeSnapshot {
    /// Walk the tree depth first and flatten it for the presentation layer.
    pub fn capture(root: &Node, library: &QuestionLibrary) -> Self {
        let mut nodes = Vec::new();
        push_node(root, library, &mut nodes);

        TreeSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            root_node_id: root.id().value(),
            node_count: nodes.len(),
            completed_splits: root.completed_splits(),
            nodes,
        }
    }

    /// Serialize the snapshot for a JSON consumer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn push_node(node: &Node, library: &QuestionLibrary, out: &mut Vec<NodeSnapshot>) {
    let (red_count, blue_count) = class_counts(node.items());

    out.push(NodeSnapshot {
        node_id: node.id().value(),
        item_ids: node.items().iter().map(|item| item.id().value()).collect(),
        red_count,
        blue_count,
        gini: gini(node.items()),
        question_key: node.question().map(str::to_string),
        question_prompt: node
            .question()
            .and_then(|key| library.resolve(key))
            .map(|question| question.prompt().to_string()),
        yes_child_id: node.yes_child_id().map(|id| id.value()),
        no_child_id: node.no_child_id().map(|id| id.value()),
    });

    if let Some(yes) = node.yes_child() {
        push_node(yes, library, out);
    }
    if let Some(no) = node.no_child() {
        push_node(no, library, out);
    }
}
