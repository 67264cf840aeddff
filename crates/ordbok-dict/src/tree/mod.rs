// Ordered word tree: an unbalanced binary search tree over strings
//
// Nodes live in an arena and refer to each other by index, so parent links
// can be kept without shared ownership. No rebalancing is ever performed:
// the tree's shape is a function of insertion order, and sorted input
// degenerates into a list. Every walk below is iterative for that reason.

mod iter;
mod node;

use std::cmp::Ordering;

use tracing::trace;

use crate::{DictError, Result};

pub use iter::Iter;
pub(crate) use iter::{InOrderIds, Levels};
pub(crate) use node::ChildSlot;
pub use node::{NodeId, WordNode};

/// Binary search tree over strings ordered by byte-wise string comparison.
///
/// Byte-wise UTF-8 order is code-point order. It differs from UTF-16
/// code-unit order only when a supplementary-plane character (U+10000 and
/// up) is compared against one in U+E000..=U+FFFF; the Norwegian and Latin
/// alphabets never hit that case.
///
/// Duplicates are allowed: inserting an existing word adds a second node
/// with the same value in the right subtree of the first. Lookup and
/// removal act on the first equal node met during descent.
#[derive(Debug, Clone, Default)]
pub struct OrderedWordTree {
    nodes: Vec<WordNode>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    live: usize,
}

impl OrderedWordTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    // =========================================================================
    // Arena
    // =========================================================================

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &WordNode {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut WordNode {
        &mut self.nodes[id.index()]
    }

    fn alloc(&mut self, value: String) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(id) => {
                *self.node_mut(id) = WordNode::new(value);
                id
            }
            None => {
                self.nodes.push(WordNode::new(value));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        *self.node_mut(id) = WordNode::default();
        self.free.push(id);
        self.live -= 1;
    }

    // =========================================================================
    // Insert / lookup
    // =========================================================================

    /// Insert a word. Descends left while the word is smaller than the
    /// current node, right otherwise, and attaches at the first empty slot.
    ///
    /// O(depth). Never checks for an existing equal word.
    pub fn insert(&mut self, word: impl Into<String>) -> NodeId {
        let id = self.alloc(word.into());
        let Some(mut current) = self.root else {
            self.root = Some(id);
            return id;
        };
        loop {
            let goes_left = self.node(id).value < self.node(current).value;
            let next = if goes_left {
                self.node(current).left
            } else {
                self.node(current).right
            };
            match next {
                Some(child) => current = child,
                None => {
                    let slot = if goes_left {
                        ChildSlot::Left(current)
                    } else {
                        ChildSlot::Right(current)
                    };
                    self.replace_slot(slot, Some(id));
                    self.node_mut(id).parent = Some(current);
                    return id;
                }
            }
        }
    }

    /// Descend from `start` looking for `word`.
    fn find_from(&self, start: Option<NodeId>, word: &str) -> Option<NodeId> {
        let mut current = start;
        while let Some(id) = current {
            let node = self.node(id);
            current = match word.cmp(node.value()) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Returns the first node holding `word` on the search path, if any.
    pub fn find(&self, word: &str) -> Option<NodeId> {
        self.find_from(self.root, word)
    }

    /// Returns `true` if `word` is in the tree. O(depth).
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove one occurrence of `word`.
    ///
    /// Returns `false` (and leaves the tree untouched) if the word is absent.
    ///
    /// A node with two children takes over its in-order successor's value
    /// and the successor's node is spliced out instead. A node with at most
    /// one child is replaced in its parent's slot (or the root slot) by that
    /// child.
    pub fn remove(&mut self, word: &str) -> bool {
        let Some(target) = self.find(word) else {
            return false;
        };
        if self.node(target).is_full() {
            let right = self.node(target).right;
            let min = self.leftmost(right);
            // The leftmost node of the right subtree is exactly the node a
            // descent for its value from `right` reaches first.
            debug_assert_eq!(
                min,
                min.and_then(|m| self.find_from(right, self.node(m).value()))
            );
            if let Some(successor) = min {
                let value = std::mem::take(&mut self.node_mut(successor).value);
                trace!(removed = word, successor = %value, "successor-copy deletion");
                self.node_mut(target).value = value;
                self.splice(successor);
            }
        } else {
            self.splice(target);
        }
        true
    }

    /// The slot that currently links to `id`.
    fn slot_of(&self, id: NodeId) -> ChildSlot {
        match self.node(id).parent {
            None => {
                debug_assert_eq!(self.root, Some(id), "parentless node is not the root");
                ChildSlot::Root
            }
            Some(parent) if self.node(parent).left == Some(id) => ChildSlot::Left(parent),
            Some(parent) => {
                debug_assert_eq!(
                    self.node(parent).right,
                    Some(id),
                    "parent does not link back to child"
                );
                ChildSlot::Right(parent)
            }
        }
    }

    fn replace_slot(&mut self, slot: ChildSlot, subtree: Option<NodeId>) {
        match slot {
            ChildSlot::Root => self.root = subtree,
            ChildSlot::Left(parent) => self.node_mut(parent).left = subtree,
            ChildSlot::Right(parent) => self.node_mut(parent).right = subtree,
        }
    }

    /// Unlink a node with at most one child, promoting that child.
    fn splice(&mut self, id: NodeId) {
        debug_assert!(!self.node(id).is_full(), "splice of a node with two children");
        let child = self.node(id).single_child();
        let parent = self.node(id).parent;
        let slot = self.slot_of(id);
        self.replace_slot(slot, child);
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        self.release(id);
    }

    // =========================================================================
    // Extremes
    // =========================================================================

    fn leftmost(&self, start: Option<NodeId>) -> Option<NodeId> {
        let mut current = start?;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        Some(current)
    }

    fn rightmost(&self, start: Option<NodeId>) -> Option<NodeId> {
        let mut current = start?;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        Some(current)
    }

    /// Smallest word in the tree.
    pub fn min(&self) -> Result<&str> {
        self.leftmost(self.root)
            .map(|id| self.node(id).value())
            .ok_or(DictError::EmptyStructure { operation: "min" })
    }

    /// Largest word in the tree (the last of any run of duplicates).
    pub fn max(&self) -> Result<&str> {
        self.rightmost(self.root)
            .map(|id| self.node(id).value())
            .ok_or(DictError::EmptyStructure { operation: "max" })
    }

    // =========================================================================
    // Traversal and shape statistics
    // =========================================================================

    /// Lazy in-order traversal of the current contents.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub(crate) fn node_ids(&self) -> InOrderIds<'_> {
        InOrderIds::new(self)
    }

    /// Owned in-order copy of every word, for callers that mutate the tree
    /// based on what they saw.
    pub fn snapshot(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    /// Number of nodes, counted by a full traversal.
    pub fn size(&self) -> usize {
        let count = self.node_ids().count();
        debug_assert_eq!(count, self.live);
        count
    }

    /// Depth of a node, following parent links up to the root (depth 1).
    pub fn depth_of(&self, id: NodeId) -> usize {
        let mut depth = 1;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        depth
    }

    /// Depth of the first node holding `word`, if present.
    pub fn node_depth(&self, word: &str) -> Option<usize> {
        self.find(word).map(|id| self.depth_of(id))
    }

    /// Height of the tree: the greatest node depth, root = 1.
    ///
    /// Returns 0 for an empty tree.
    pub fn depth(&self) -> usize {
        Levels::new(self).map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Number of nodes at each depth; index `i` counts depth `i + 1`.
    ///
    /// The length equals [`depth`](Self::depth); empty for an empty tree.
    pub fn depth_histogram(&self) -> Vec<usize> {
        let mut histogram = Vec::new();
        for (_, depth) in Levels::new(self) {
            if histogram.len() < depth {
                histogram.resize(depth, 0);
            }
            histogram[depth - 1] += 1;
        }
        histogram
    }

    /// Mean node depth, weighted over the depth histogram.
    pub fn average_depth(&self) -> Result<f64> {
        let histogram = self.depth_histogram();
        let count: usize = histogram.iter().sum();
        if count == 0 {
            return Err(DictError::EmptyStructure {
                operation: "average_depth",
            });
        }
        let weighted: usize = histogram
            .iter()
            .enumerate()
            .map(|(i, n)| n * (i + 1))
            .sum();
        Ok(weighted as f64 / count as f64)
    }

    /// Verify the order invariant and parent/child back-references.
    ///
    /// Intended for tests and debug checks; O(size).
    pub fn is_consistent(&self) -> bool {
        if let Some(root) = self.root {
            if self.node(root).parent.is_some() {
                return false;
            }
        }
        for (id, _) in Levels::new(self) {
            let node = self.node(id);
            if let Some(left) = node.left {
                if self.node(left).parent != Some(id) || self.node(left).value >= node.value {
                    return false;
                }
            }
            if let Some(right) = node.right {
                if self.node(right).parent != Some(id) || self.node(right).value < node.value {
                    return false;
                }
            }
        }
        self.iter()
            .zip(self.iter().skip(1))
            .all(|(a, b)| a <= b)
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedWordTree {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut tree = OrderedWordTree::new();
        for word in words {
            tree.insert(word);
        }
        tree
    }
}
