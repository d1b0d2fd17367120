//! Recursive van Emde Boas layout.
//!
//! A node over a `u`-bit universe splits keys into ⌈u/2⌉ high bits (cluster
//! index) and ⌊u/2⌋ low bits (offset), owns one lazily allocated child per
//! non-empty cluster plus a summary child indexing which clusters are live,
//! and keeps its minimum out of the clusters entirely so the common insert
//! and delete cases recurse into only one half.

mod child;
mod node;

pub use child::Child;
pub use node::VebNode;
