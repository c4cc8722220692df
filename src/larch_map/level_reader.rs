use core::fmt;

use alloc::vec::Vec;

use crate::entry::Entry;
use crate::raw::Node;

/// A read-only walker over the nodes of one tree level at a time.
///
/// Created by [`LarchMap::level_reader`](crate::LarchMap::level_reader).
/// Intended for structural tests and diagnostics; it exposes node shapes,
/// not a key lookup path.
pub struct LevelReader<'a, K, V> {
    root: &'a Node<K, V>,
}

impl<'a, K, V> LevelReader<'a, K, V> {
    pub(crate) fn new(root: &'a Node<K, V>) -> Self {
        LevelReader { root }
    }

    /// Returns the tree depth, found by walking the left-most spine.
    ///
    /// Equal to [`LarchMap::depth`](crate::LarchMap::depth): the number of
    /// edges from the root to any leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.root;
        while !node.is_leaf() {
            depth += 1;
            node = &node.children()[0];
        }
        depth
    }

    /// Returns every node at the given depth, left to right.
    ///
    /// Depth 0 is the root alone; each further level expands to the
    /// children of the previous one. A depth below the leaves yields an
    /// empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use larch::LarchMap;
    ///
    /// let mut map = LarchMap::new(3);
    /// for key in 0..7 {
    ///     map.insert(key, ());
    /// }
    ///
    /// let reader = map.level_reader();
    /// let leaves = reader.nodes_at_depth(2);
    /// assert!(leaves.iter().all(|node| node.is_leaf()));
    /// let keys: Vec<i32> = leaves
    ///     .iter()
    ///     .flat_map(|node| node.entries().iter().map(|entry| *entry.key()))
    ///     .collect();
    /// assert_eq!(keys, [0, 2, 4, 6]);
    /// ```
    #[must_use]
    pub fn nodes_at_depth(&self, depth: usize) -> Vec<NodeView<'a, K, V>> {
        let mut level: Vec<&'a Node<K, V>> = Vec::new();
        level.push(self.root);
        for _ in 0..depth {
            level = level.iter().flat_map(|node| node.children()).collect();
        }
        level.into_iter().map(|node| NodeView { node }).collect()
    }
}

impl<K, V> Clone for LevelReader<'_, K, V> {
    fn clone(&self) -> Self {
        LevelReader { root: self.root }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for LevelReader<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelReader").field("depth", &self.depth()).finish()
    }
}

/// A read-only view of a single tree node.
///
/// Handed out by [`LevelReader::nodes_at_depth`].
pub struct NodeView<'a, K, V> {
    node: &'a Node<K, V>,
}

impl<'a, K, V> NodeView<'a, K, V> {
    /// Returns the node's entries, sorted strictly ascending by key.
    #[must_use]
    pub fn entries(&self) -> &'a [Entry<K, V>] {
        self.node.entries()
    }

    /// Returns the number of entries in the node.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.node.entry_count()
    }

    /// Returns true if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Returns the number of children of the node.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.node.child_count()
    }
}

impl<K, V> Clone for NodeView<'_, K, V> {
    fn clone(&self) -> Self {
        NodeView { node: self.node }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for NodeView<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.node.entries().iter().map(Entry::key))
            .finish()
    }
}
