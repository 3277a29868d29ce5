use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over the keys `0..num`, in either order.
/// Inserting them into an empty tree builds a degenerate, list-shaped tree
pub struct SequentialGenerator {
    position: usize,
    num: usize,
    order: SequentialOrder,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialGenerator {
    pub fn new(num: usize, order: SequentialOrder) -> SequentialGenerator {
        SequentialGenerator {
            position: 0,
            num,
            order,
        }
    }
}

impl Iterator for SequentialGenerator {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            return None;
        }
        let key = match self.order {
            SequentialOrder::Ascending => self.position,
            SequentialOrder::Descending => self.num - 1 - self.position,
        };
        self.position += 1;
        Some(key as i64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialGenerator {}

impl ExactSizeIterator for SequentialGenerator {}
