mod node;
mod tree;
mod tree_iter;

pub use tree::OrderedTree;
pub use tree_iter::Iter;

/// Answer from a visitor passed to `OrderedTree::traverse`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Visit {
    /// Keep walking to the next pair
    Continue,
    /// End the whole traversal now
    Stop,
}

impl Visit {
    /// Whether the visitor asked to end the walk
    pub fn is_stop(self) -> bool {
        self == Visit::Stop
    }
}
