//! # veb-fast-set
//!
//! Ordered integer set over a fixed universe `[0, 2^u)` with worst-case
//! O(log log U) membership, insert, delete, successor and predecessor, and
//! O(1) min/max: a van Emde Boas layout.
//!
//! ## Features
//! - O(1) min/max
//! - O(log log U) insert, contains, remove, successor, predecessor
//! - Memory-compacted default layout bounded by O(U) bits
//! - Word-level base case: universes of ≤ 64 keys are a single `u64`
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```
//! use veb_fast_set::VebSet;
//!
//! let mut set = VebSet::new(16).unwrap();
//! set.insert(1000);
//! set.insert(3);
//! assert_eq!(set.min(), Some(3));
//! assert_eq!(set.successor(3), Some(1000));
//! assert_eq!(set.predecessor(1000), Some(3));
//! ```

#![no_std]

extern crate alloc;

mod bits;
mod compact;
mod constants;
mod iter;
mod key;
mod set;
mod tree;

pub use iter::{Iter, Range};
pub use set::{UniverseError, VebSet};
