use super::node::{Link, Node};
use super::OrderedTree;

/// Lazy in-order iterator over the pairs of an `OrderedTree`.
/// Nodes are only visited as `next` is called, so dropping the iterator early
/// leaves the rest of the tree untouched
pub struct Iter<'a, K, V> {
    /// Nodes whose left subtree is being walked or was just walked, deepest last
    pending: Vec<&'a Node<K, V>>,
    len: usize,
}

impl<'a, K: Ord, V> Iter<'a, K, V> {
    pub(super) fn new(tree: &'a OrderedTree<K, V>) -> Self {
        let mut iter = Iter {
            pending: vec![],
            len: tree.len(),
        };
        iter.descend_from(&tree.root);
        iter
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Push `link` and its chain of left children
    fn descend_from(&mut self, mut link: &'a Link<K, V>) {
        while let Some(node) = link {
            self.pending.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.descend_from(&node.right);
        self.len -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> std::iter::FusedIterator for Iter<'a, K, V> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iter() {
        fn check(values: Vec<i32>) {
            let tree: OrderedTree<i32, ()> = values.iter().map(|&v| (v, ())).collect();
            let mut expected = values.clone();
            expected.sort();
            expected.dedup();

            let mut it = tree.iter();
            assert_eq!(it.len(), expected.len());
            let collected = it.by_ref().map(|(k, _)| *k).collect::<Vec<_>>();
            assert_eq!(collected, expected);
            assert_eq!(it.len(), 0);
            assert_eq!(it.next(), None);
        }

        check(vec![]);
        check(vec![1]);
        // Degenerate, leaning right and left
        check((0..500).collect());
        check((0..500).rev().collect());
        // Zig-zag
        check(vec![50, 10, 40, 20, 30, 25, 27, 26]);
        // Pi
        check(vec![
            31, 41, 59, 26, 53, 58, 97, 93, 23, 84, 62, 64, 33, 83, 27, 95, 2, 88, 41, 97, 16, 93,
            99, 37, 51, 5, 82, 9, 74, 94, 45, 92, 30, 78, 16, 40, 62, 86, 20, 89, 98, 62, 80, 34,
            82, 53, 42, 11, 70, 67, 98, 21, 48, 8, 65, 13, 28, 23, 6, 64, 70, 93, 84, 46, 9, 55, 5,
            82, 23, 17, 25, 35, 94, 8, 12, 84, 81, 11, 74, 50, 28, 41, 2, 70, 19, 38, 52, 11, 5,
            55, 96, 44, 62, 29, 48, 95, 49, 30, 38, 19, 64, 42, 88, 10, 97, 56, 65, 93, 34, 46, 12,
            84, 75, 64, 82, 33, 78, 67, 83, 16, 52, 71, 20, 19, 9, 14, 56, 48, 56, 69, 23, 46, 3,
        ]);
    }

    #[test]
    fn lazy_and_restartable() {
        let tree: OrderedTree<i32, char> = vec![(3, 'x'), (1, 'y'), (2, 'z')].into_iter().collect();

        let mut it = tree.iter();
        assert_eq!(it.next(), Some((&1, &'y')));
        assert_eq!(it.len(), 2);
        drop(it);

        let again = tree.iter().collect::<Vec<_>>();
        assert_eq!(again, vec![(&1, &'y'), (&2, &'z'), (&3, &'x')]);
    }

    #[test]
    fn stack_stays_bounded_by_height() {
        let tree: OrderedTree<i32, ()> = (0..100).map(|k| (k, ())).collect();
        let mut it = tree.iter();
        // Ascending insertion leans right: the left spine is a single node
        assert_eq!(it.pending.len(), 1);
        it.next();
        assert_eq!(it.pending.len(), 1);

        let tree: OrderedTree<i32, ()> = (0..100).rev().map(|k| (k, ())).collect();
        let it = tree.iter();
        assert_eq!(it.pending.len(), 100);
    }
}
