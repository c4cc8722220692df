use core::borrow::Borrow;

use super::degree::Degree;
use super::node::{InsertOutcome, Node, RemoveStep};

/// The core B-tree implementation backing `LarchMap`.
///
/// Owns the root node and the tree's fixed degree, delegates every
/// operation to the root, and reacts to the two root-level structural
/// events: growing a level when the root splits, and shedding one when a
/// removal drains the root of entries.
#[derive(Clone)]
pub(crate) struct RawLarchMap<K, V> {
    root: Node<K, V>,
    degree: Degree,
    len: usize,
}

impl<K, V> RawLarchMap<K, V> {
    /// Creates an empty tree of the given degree.
    ///
    /// # Panics
    ///
    /// Panics if `degree < 2`.
    pub(crate) fn new(degree: usize) -> Self {
        RawLarchMap {
            root: Node::new(),
            degree: Degree::new(degree),
            len: 0,
        }
    }

    /// Returns the tree's degree.
    pub(crate) fn degree(&self) -> usize {
        self.degree.get()
    }

    /// Returns the number of entries in the tree.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every entry, leaving an empty leaf root.
    pub(crate) fn clear(&mut self) {
        self.root = Node::new();
        self.len = 0;
    }

    /// Returns the root node.
    pub(crate) fn root(&self) -> &Node<K, V> {
        &self.root
    }

    /// Returns the number of edges from the root to any leaf; 0 for an
    /// empty or single-leaf tree.
    pub(crate) fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = &self.root;
        while !node.is_leaf() {
            depth += 1;
            node = &node.children()[0];
        }
        depth
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.root.get(key)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.root.get_mut(key)
    }

    /// Inserts or updates an entry, returning the previous value on a key
    /// match. A split that reaches the root grows the tree by one level.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        match self.root.insert(key, value, self.degree) {
            InsertOutcome::Replaced(previous) => Some(previous),
            InsertOutcome::Inserted => {
                self.len += 1;
                None
            }
            InsertOutcome::Split { promoted, right } => {
                let left = core::mem::replace(&mut self.root, Node::new());
                self.root = Node::new_root(promoted, left, right);
                self.len += 1;
                None
            }
        }
    }

    /// Removes `key`, returning its value. Removing an absent key is a
    /// benign no-op returning `None`.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.root.remove(key, self.degree) {
            RemoveStep::Absent => None,
            RemoveStep::Removed { value, .. } => {
                self.len -= 1;
                self.collapse_root();
                Some(value)
            }
        }
    }

    /// The root has no sibling to be corrected against; when correction
    /// drains it of entries its sole remaining child takes its place and
    /// the tree loses a level. An emptied leaf root is just the empty tree.
    fn collapse_root(&mut self) {
        if self.root.entry_count() == 0 && !self.root.is_leaf() {
            self.root = self.root.take_only_child();
        }
    }
}
