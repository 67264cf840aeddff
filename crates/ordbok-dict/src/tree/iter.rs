// Lazy traversals over the ordered word tree

use super::OrderedWordTree;
use super::node::NodeId;

/// In-order walk yielding node ids, driven by an explicit stack so a
/// degenerate (list-shaped) tree cannot overflow the call stack.
pub(crate) struct InOrderIds<'a> {
    tree: &'a OrderedWordTree,
    stack: Vec<NodeId>,
    pending: Option<NodeId>,
}

impl<'a> InOrderIds<'a> {
    pub(crate) fn new(tree: &'a OrderedWordTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            pending: tree.root,
        }
    }
}

impl Iterator for InOrderIds<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(id) = self.pending {
            self.stack.push(id);
            self.pending = self.tree.node(id).left;
        }
        let id = self.stack.pop()?;
        self.pending = self.tree.node(id).right;
        Some(id)
    }
}

/// In-order iterator over the words of a tree.
///
/// Finite and lazy. The iterator borrows the tree, so the tree cannot be
/// mutated while it is alive; calling [`OrderedWordTree::iter`] again starts
/// a fresh traversal of the current contents.
pub struct Iter<'a> {
    ids: InOrderIds<'a>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(tree: &'a OrderedWordTree) -> Self {
        Self {
            ids: InOrderIds::new(tree),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let tree = self.ids.tree;
        self.ids.next().map(|id| tree.node(id).value())
    }
}

impl<'a> IntoIterator for &'a OrderedWordTree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order walk yielding `(node, depth)` with the root at depth 1.
pub(crate) struct Levels<'a> {
    tree: &'a OrderedWordTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Levels<'a> {
    pub(crate) fn new(tree: &'a OrderedWordTree) -> Self {
        Self {
            tree,
            stack: tree.root.map(|root| (root, 1)).into_iter().collect(),
        }
    }
}

impl Iterator for Levels<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<(NodeId, usize)> {
        let (id, depth) = self.stack.pop()?;
        let node = self.tree.node(id);
        if let Some(right) = node.right {
            self.stack.push((right, depth + 1));
        }
        if let Some(left) = node.left {
            self.stack.push((left, depth + 1));
        }
        Some((id, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(words: &[&str]) -> OrderedWordTree {
        let mut tree = OrderedWordTree::new();
        for w in words {
            tree.insert(*w);
        }
        tree
    }

    #[test]
    fn iter_on_empty_tree_is_empty() {
        let tree = OrderedWordTree::new();
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn iter_yields_sorted_words() {
        let tree = tree_of(&["m", "d", "t", "b", "h", "p", "z"]);
        let words: Vec<&str> = tree.iter().collect();
        assert_eq!(words, vec!["b", "d", "h", "m", "p", "t", "z"]);
    }

    #[test]
    fn iter_is_restartable() {
        let tree = tree_of(&["b", "a", "c"]);
        let first: Vec<&str> = tree.iter().collect();
        let second: Vec<&str> = (&tree).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn iter_is_lazy() {
        let tree = tree_of(&["b", "a", "c"]);
        let mut it = tree.iter();
        assert_eq!(it.next(), Some("a"));
        assert_eq!(it.next(), Some("b"));
        assert_eq!(it.next(), Some("c"));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn iter_handles_list_shaped_tree() {
        let words: Vec<String> = (0..20_000).map(|i| format!("w{i:06}")).collect();
        let mut tree = OrderedWordTree::new();
        for w in &words {
            tree.insert(w.as_str());
        }
        assert_eq!(tree.iter().count(), words.len());
        assert_eq!(tree.iter().next(), Some("w000000"));
    }

    #[test]
    fn levels_report_root_at_depth_one() {
        let tree = tree_of(&["b", "a", "c", "d"]);
        let mut levels: Vec<(String, usize)> = Levels::new(&tree)
            .map(|(id, depth)| (tree.node(id).value().to_string(), depth))
            .collect();
        levels.sort();
        assert_eq!(
            levels,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 1),
                ("c".to_string(), 2),
                ("d".to_string(), 3),
            ]
        );
    }
}
