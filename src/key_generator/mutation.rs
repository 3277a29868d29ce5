use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// A single write against a map
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mutation {
    Insert(i64, u64),
    Delete(i64),
}

/// An iterator that will generate `num` random mutations over keys in
/// `0..key_space`. Each one is an insertion with probability `insert_ratio`,
/// otherwise a deletion. A small key space makes overwrites and deletions of
/// present keys frequent
pub struct MutationGenerator {
    remaining: usize,
    key_space: i64,
    insert_ratio: f64,
    rng: Pcg64,
}

impl MutationGenerator {
    pub fn new(num: usize, key_space: i64, insert_ratio: f64, seed: u64) -> MutationGenerator {
        assert!(key_space > 0);
        assert!(
            insert_ratio >= 0. && insert_ratio <= 1.,
            "Invalid insert ratio {}: out of range",
            insert_ratio
        );
        MutationGenerator {
            remaining: num,
            key_space,
            insert_ratio,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for MutationGenerator {
    type Item = Mutation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let key = self.rng.gen_range(0, self.key_space);
        if self.rng.gen::<f64>() < self.insert_ratio {
            Some(Mutation::Insert(key, self.rng.gen()))
        } else {
            Some(Mutation::Delete(key))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for MutationGenerator {}

impl ExactSizeIterator for MutationGenerator {}
