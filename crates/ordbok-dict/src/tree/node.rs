// Arena node storage for the ordered word tree

/// Index of a node in the tree's arena.
///
/// Ids are only meaningful for the tree that issued them and may be reused
/// after the node they named is spliced out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// One tree node: a word plus arena links to its children and parent.
///
/// Every word in the `left` subtree compares strictly less than `value`;
/// every word in the `right` subtree compares greater or equal. `parent` is
/// `None` only for the root (and for free arena slots).
#[derive(Debug, Clone, Default)]
pub struct WordNode {
    pub(crate) value: String,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl WordNode {
    pub(crate) fn new(value: String) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The node's only child, if it has at most one.
    ///
    /// Returns `None` both for leaves and for nodes with two children;
    /// callers splice only nodes that are not full.
    pub(crate) fn single_child(&self) -> Option<NodeId> {
        match (self.left, self.right) {
            (Some(_), Some(_)) => None,
            (left, right) => left.or(right),
        }
    }

    pub(crate) fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

/// A place in the tree that holds a link to a subtree.
///
/// Splicing writes through a slot, so replacing the root is handled the
/// same way as replacing an interior child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChildSlot {
    Root,
    Left(NodeId),
    Right(NodeId),
}
