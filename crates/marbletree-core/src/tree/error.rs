use std::fmt;

use crate::tree::ids::NodeId;

/// Error type for split requests against the partition tree.
/// Every variant is recoverable: a failed request leaves the current
/// snapshot and the history untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// The target node id is absent from the current tree.
    NodeNotFound { node_id: NodeId },
    /// The question routed every item into one branch, so no split was applied.
    DegenerateSplit { node_id: NodeId, key: String },
    /// The requested question key is not registered in the library.
    UnknownQuestion { key: String },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::NodeNotFound { node_id } => {
                write!(f, "no node with id {}", node_id.value())
            }
            SplitError::DegenerateSplit { node_id, key } => write!(
                f,
                "question '{}' sends every item of node {} to one branch",
                key,
                node_id.value()
            ),
            SplitError::UnknownQuestion { key } => {
                write!(f, "unknown question '{key}'")
            }
        }
    }
}

impl std::error::Error for SplitError {}
