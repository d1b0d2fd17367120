//! Word-level set machinery.
//!
//! A universe of at most 64 keys fits in one machine word; everything here
//! reduces to TZCNT / LZCNT / mask operations.

mod board;
mod vector;

pub use board::BitBoard;
pub use vector::BitVector;
