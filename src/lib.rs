//! An ordered map implemented as an unbalanced binary search tree, together
//! with a small line-oriented command interpreter built on top of it.
//!
//! ```
//! use ordered_tree::{OrderedTree, Visit};
//!
//! let mut tree = OrderedTree::new();
//! tree.insert(2, "b");
//! tree.insert(1, "a");
//! assert_eq!(tree.find(&2), Some(&"b"));
//!
//! let mut first = None;
//! tree.traverse(|key, _| {
//!     first = Some(*key);
//!     Visit::Stop
//! });
//! assert_eq!(first, Some(1));
//! ```


pub mod interpreter;

#[cfg(any(test, feature = "key-generator"))]
pub mod key_generator;

pub mod tree;

pub use tree::{Iter, OrderedTree, Visit};
