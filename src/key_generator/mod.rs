//! Seeded key sequences, used to build trees of a known shape in tests and benches
mod mutation;
mod random;
mod sequential;

pub use mutation::*;
pub use random::*;
pub use sequential::*;
