use crate::tree::ids::NodeId;
use crate::tree::item::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One applied split: the question key plus the yes/no subtrees.
/// The yes child holds the items where the test held, the no child the rest.
struct NodeSplit {
    question: String,
    yes: Box<Node>,
    no: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One node of the partition tree: the item subset that reached it and,
/// once split, the applied question with its two children.
///
/// A node is a leaf exactly while `split` is absent, so the question field,
/// the child links, and leaf-ness can never disagree.
pub struct Node {
    id: NodeId,
    items: Vec<Item>,
    split: Option<NodeSplit>,
}

impl Node {
    /// Create an unsplit leaf holding the given item subset.
    pub fn leaf(id: NodeId, items: Vec<Item>) -> Self {
        Node {
            id,
            items,
            split: None,
        }
    }

    /// Attach an applied split to a rebuilt copy of a node.
    pub(crate) fn with_split(
        id: NodeId,
        items: Vec<Item>,
        question: String,
        yes: Node,
        no: Node,
    ) -> Self {
        Node {
            id,
            items,
            split: Some(NodeSplit {
                question,
                yes: Box::new(yes),
                no: Box::new(no),
            }),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The item subset that reached this node.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// A node stays a leaf until a split has been applied to it.
    pub fn is_leaf(&self) -> bool {
        self.split.is_none()
    }

    /// Key of the question this node was split on, if any.
    pub fn question(&self) -> Option<&str> {
        self.split.as_ref().map(|split| split.question.as_str())
    }

    /// The child holding the items where the split test held.
    pub fn yes_child(&self) -> Option<&Node> {
        self.split.as_ref().map(|split| split.yes.as_ref())
    }

    /// The child holding the remaining items.
    pub fn no_child(&self) -> Option<&Node> {
        self.split.as_ref().map(|split| split.no.as_ref())
    }

    pub fn yes_child_id(&self) -> Option<NodeId> {
        self.yes_child().map(Node::id)
    }

    pub fn no_child_id(&self) -> Option<NodeId> {
        self.no_child().map(Node::id)
    }

    /// Borrow the question key and both children of a split node at once.
    pub(crate) fn split_parts(&self) -> Option<(&str, &Node, &Node)> {
        self.split
            .as_ref()
            .map(|split| (split.question.as_str(), split.yes.as_ref(), split.no.as_ref()))
    }

    /// Locate a node by id, depth first with the yes branch before the no branch.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }

        let split = self.split.as_ref()?;
        split.yes.find(id).or_else(|| split.no.find(id))
    }

    /// Count the completed splits in the whole subtree.
    ///
    /// Availability gating always derives this from the tree shape instead of
    /// a stored counter, so the count can never drift from the snapshot it
    /// describes.
    pub fn completed_splits(&self) -> usize {
        match &self.split {
            Some(split) => 1 + split.yes.completed_splits() + split.no.completed_splits(),
            None => 0,
        }
    }
}
