/// A wrapper for the integer id assigned to one tree node
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Get the value of the id without having to access and risk overriding the internal value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    /// Allow for explicit conversion from u64 to NodeId
    fn from(value: u64) -> Self {
        NodeId(value)
    }
}

/// A wrapper for the integer id assigned to one dataset item
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl ItemId {
    /// Get the value of the id without having to access and risk overriding the internal value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    /// Allow for explicit conversion from u32 to ItemId
    fn from(value: u32) -> Self {
        ItemId(value)
    }
}

/// Hands out fresh node ids for one session.
/// Ids only ever move forward, so every id stays unique for the session
/// lifetime regardless of tree shape or how often splits are undone.
#[derive(Debug, Clone)]
pub struct NodeIdAllocator {
    next: u64,
}

impl NodeIdAllocator {
    /// Create an allocator that hands out ids strictly after `last`.
    pub fn starting_after(last: NodeId) -> Self {
        NodeIdAllocator {
            next: last.value() + 1,
        }
    }

    /// Reserve the ids for one yes/no child pair.
    pub fn reserve_pair(&mut self) -> (NodeId, NodeId) {
        let yes = NodeId::from(self.next);
        let no = NodeId::from(self.next + 1);
        self.next += 2;
        (yes, no)
    }
}
