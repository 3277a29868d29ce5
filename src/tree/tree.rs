use super::node::{self, Link, Node};
use super::{Iter, Visit};
use std::fmt;
use std::iter::FromIterator;

/// A map backed by an unbalanced binary search tree.
/// Its shape is purely a consequence of the order of insertions and deletions
pub struct OrderedTree<K: Ord, V> {
    pub(super) root: Link<K, V>,
    len: usize,
}

impl<K: Ord, V> OrderedTree<K, V> {
    pub fn new() -> Self {
        OrderedTree { root: None, len: 0 }
    }

    /// Map `key` to `value`. When the key is already present, only its value
    /// is overwritten and the tree shape is unchanged
    pub fn insert(&mut self, key: K, value: V) {
        let slot = node::slot_mut(&mut self.root, &key);
        match slot {
            Some(node) => node.value = value,
            None => {
                *slot = Some(Node::leaf(key, value));
                self.len += 1;
            }
        }
    }

    /// Return the value mapped to `key`, if any
    pub fn find(&self, key: &K) -> Option<&V> {
        node::search(&self.root, key).map(|node| &node.value)
    }

    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        node::slot_mut(&mut self.root, key)
            .as_mut()
            .map(|node| &mut node.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Remove `key` from the tree, returning the value it was mapped to.
    /// Deleting an absent key leaves the tree untouched.
    ///
    /// A node with two children is not unlinked: it adopts the key and value of
    /// its in-order successor, which is removed from the right subtree instead
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let (_, value) = node::unlink(node::slot_mut(&mut self.root, key))?;
        self.len -= 1;
        Some(value)
    }

    /// Return the number of key-value pairs in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of nodes on the longest path from the root, which is
    /// also the worst-case number of comparisons for a lookup
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Return a lazy iterator over the pairs in ascending key order.
    /// Each call starts a new walk over the current state of the tree
    pub fn iter(&self) -> Iter<K, V> {
        Iter::new(self)
    }

    /// Call `visitor` on each pair in ascending key order, until it asks to stop.
    /// Return `Visit::Stop` if the walk was cut short
    pub fn traverse<F>(&self, mut visitor: F) -> Visit
    where
        F: FnMut(&K, &V) -> Visit,
    {
        for (key, value) in self.iter() {
            if visitor(key, value).is_stop() {
                return Visit::Stop;
            }
        }
        Visit::Continue
    }
}

impl<K: Ord, V> Default for OrderedTree<K, V> {
    fn default() -> Self {
        OrderedTree::new()
    }
}

impl<K: Ord, V> Drop for OrderedTree<K, V> {
    fn drop(&mut self) {
        node::drop_link(&mut self.root);
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a OrderedTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V: PartialEq> PartialEq for OrderedTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Ord, V: Eq> Eq for OrderedTree<K, V> {}

#[cfg(test)]
impl<K: Ord + fmt::Debug, V> OrderedTree<K, V> {
    /// Assert the search-tree ordering at every node and that `len` is accurate
    pub(crate) fn check_invariants(&self) {
        let mut count = 0;
        // (node, exclusive lower bound, exclusive upper bound)
        let mut pending: Vec<(&Node<K, V>, Option<&K>, Option<&K>)> = vec![];
        if let Some(root) = self.root.as_deref() {
            pending.push((root, None, None));
        }
        while let Some((node, lower, upper)) = pending.pop() {
            count += 1;
            if let Some(lower) = lower {
                assert!(node.key > *lower, "{:?} should be after {:?}", node.key, lower);
            }
            if let Some(upper) = upper {
                assert!(node.key < *upper, "{:?} should be before {:?}", node.key, upper);
            }
            if let Some(left) = node.left.as_deref() {
                pending.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, Some(&node.key), upper));
            }
        }
        assert_eq!(count, self.len);
    }
}
