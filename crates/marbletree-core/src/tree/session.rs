use tracing::warn;

use crate::tree::error::SplitError;
use crate::tree::history::History;
use crate::tree::ids::{ItemId, NodeId, NodeIdAllocator};
use crate::tree::impurity::gini;
use crate::tree::item::Item;
use crate::tree::node::Node;
use crate::tree::question::QuestionLibrary;
use crate::tree::snapshot::TreeSnapshot;
use crate::tree::split::apply_split;

/// Id assigned to the root node of every session.
const ROOT_NODE_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One question offered for a node: the stable key plus the display prompt.
pub struct QuestionChoice {
    pub key: String,
    pub prompt: String,
}

#[derive(Debug, Clone)]
/// Owns the state of one interactive game: the question library, the
/// undo/redo history, and the node id allocator.
///
/// One value per game; independent sessions never share state. Every
/// operation runs to completion as a single step, so readers between
/// operations always observe a fully built snapshot.
pub struct Session {
    library: QuestionLibrary,
    history: History,
    ids: NodeIdAllocator,
}

impl Session {
    /// Start a session over the full dataset with an unsplit root.
    pub fn new(dataset: Vec<Item>, library: QuestionLibrary) -> Self {
        let root_id = NodeId::from(ROOT_NODE_ID);
        Session {
            library,
            history: History::new(Node::leaf(root_id, dataset)),
            ids: NodeIdAllocator::starting_after(root_id),
        }
    }

    /// Read-only view of the current tree snapshot.
    pub fn current_tree(&self) -> &Node {
        self.history.current()
    }

    /// Completed splits in the current snapshot, recomputed from the tree shape.
    pub fn completed_splits(&self) -> usize {
        self.history.current().completed_splits()
    }

    pub fn library(&self) -> &QuestionLibrary {
        &self.library
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Questions offered for a node, in library order.
    ///
    /// A node is offered questions only while it exists, is still a leaf, and
    /// is impure; each question is additionally gated on its own completed
    /// split threshold, evaluated fresh against the current snapshot.
    pub fn available_questions(&self, node_id: NodeId) -> Vec<QuestionChoice> {
        let tree = self.history.current();
        let Some(node) = tree.find(node_id) else {
            return Vec::new();
        };

        if !node.is_leaf() || gini(node.items()) == 0.0 {
            return Vec::new();
        }

        let completed = tree.completed_splits();
        self.library
            .questions()
            .iter()
            .filter(|question| question.available(completed))
            .map(|question| QuestionChoice {
                key: question.key().to_string(),
                prompt: question.prompt().to_string(),
            })
            .collect()
    }

    /// Resolve and apply one split request, recording the new snapshot.
    ///
    /// On any error the history is left untouched. `UnknownQuestion` and
    /// `NodeNotFound` indicate a caller bug and are logged; `DegenerateSplit`
    /// must be surfaced to the player as a named condition, never swallowed.
    pub fn request_split(&mut self, node_id: NodeId, key: &str) -> Result<&Node, SplitError> {
        let Some(question) = self.library.resolve(key) else {
            warn!(key, "split requested for unregistered question");
            return Err(SplitError::UnknownQuestion {
                key: key.to_string(),
            });
        };

        let next = match apply_split(self.history.current(), node_id, question, &mut self.ids) {
            Ok(next) => next,
            Err(err) => {
                if let SplitError::NodeNotFound { node_id } = &err {
                    warn!(node_id = node_id.value(), "split requested for missing node");
                }
                return Err(err);
            }
        };

        self.history.record(next);
        Ok(self.history.current())
    }

    /// Step back one snapshot; no-op at the start of the history.
    pub fn undo(&mut self) -> &Node {
        self.history.undo()
    }

    /// Step forward one snapshot; no-op at the end of the history.
    pub fn redo(&mut self) -> &Node {
        self.history.redo()
    }

    /// Pure item lookup for the presentation layer's inspect dialog.
    pub fn inspect(&self, item_id: ItemId) -> Option<&Item> {
        // The root of every snapshot carries the full dataset.
        self.history
            .current()
            .items()
            .iter()
            .find(|item| item.id() == item_id)
    }

    /// Flat presentation-layer export of the current tree.
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot::capture(self.history.current(), &self.library)
    }
}
