/// Index of a node within the tree's arena table. The "null pointer" is `Option::<NodeId>::None`.
pub(crate) type NodeId = usize;

/// A single tree node: one key and two owned child slots. Nodes carry no parent link; parents are
/// rediscovered during breadth-first traversal when removal needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub key: i32,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    pub(crate) const fn leaf(key: i32) -> Node {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
