use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};
use std::vec;

/// An iterator over the keys `0..num` in a random order fixed by `seed`.
/// Inserting them into an empty tree builds a tree of expected height O(log num)
pub struct RandomGenerator {
    keys: vec::IntoIter<i64>,
}

impl RandomGenerator {
    pub fn new(num: usize, seed: u64) -> RandomGenerator {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut keys: Vec<i64> = (0..num as i64).collect();
        keys.shuffle(&mut rng);
        RandomGenerator {
            keys: keys.into_iter(),
        }
    }
}

impl Iterator for RandomGenerator {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl FusedIterator for RandomGenerator {}

impl ExactSizeIterator for RandomGenerator {}
