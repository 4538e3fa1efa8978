use crate::tree::error::SplitError;
use crate::tree::ids::{NodeId, NodeIdAllocator};
use crate::tree::item::Item;
use crate::tree::node::Node;
use crate::tree::question::Question;

/// Apply `question` at the node with id `target`, producing a brand-new root.
///
/// The input tree is never mutated: ancestors on the path to the target are
/// rebuilt and every off-path subtree is carried over unchanged, so earlier
/// history snapshots stay structurally intact.
pub fn apply_split(
    root: &Node,
    target: NodeId,
    question: &Question,
    ids: &mut NodeIdAllocator,
) -> Result<Node, SplitError> {
    rebuild(root, target, question, ids)?.ok_or(SplitError::NodeNotFound { node_id: target })
}

/// Recursive structural rebuild. `Ok(None)` means the target is not in this
/// subtree; the search is depth first, yes branch before no branch.
fn rebuild(
    node: &Node,
    target: NodeId,
    question: &Question,
    ids: &mut NodeIdAllocator,
) -> Result<Option<Node>, SplitError> {
    if node.id() == target {
        return split_node(node, question, ids).map(Some);
    }

    let Some((key, yes, no)) = node.split_parts() else {
        return Ok(None);
    };

    if let Some(new_yes) = rebuild(yes, target, question, ids)? {
        return Ok(Some(Node::with_split(
            node.id(),
            node.items().to_vec(),
            key.to_string(),
            new_yes,
            no.clone(),
        )));
    }

    if let Some(new_no) = rebuild(no, target, question, ids)? {
        return Ok(Some(Node::with_split(
            node.id(),
            node.items().to_vec(),
            key.to_string(),
            yes.clone(),
            new_no,
        )));
    }

    Ok(None)
}

/// Partition the node's items and attach the two fresh leaves.
fn split_node(
    node: &Node,
    question: &Question,
    ids: &mut NodeIdAllocator,
) -> Result<Node, SplitError> {
    let (yes_items, no_items): (Vec<Item>, Vec<Item>) = node
        .items()
        .iter()
        .copied()
        .partition(|item| question.check(item));

    // Degenerate guard runs before any id is reserved.
    if yes_items.is_empty() || no_items.is_empty() {
        return Err(SplitError::DegenerateSplit {
            node_id: node.id(),
            key: question.key().to_string(),
        });
    }

    let (yes_id, no_id) = ids.reserve_pair();
    Ok(Node::with_split(
        node.id(),
        node.items().to_vec(),
        question.key().to_string(),
        Node::leaf(yes_id, yes_items),
        Node::leaf(no_id, no_items),
    ))
}
