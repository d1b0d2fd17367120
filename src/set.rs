//! Public set type and construction.

use core::fmt;

use crate::bits::BitBoard;
use crate::compact::CompactVeb;
use crate::constants::{BOARD_BITS, MAX_UNIVERSE_BITS};
use crate::iter::{Iter, Range};
use crate::key::universe_size;
use crate::tree::VebNode;

/// Construction failure: the requested universe width is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniverseError {
    /// A zero-bit universe holds no keys.
    ZeroWidth,
    /// The width exceeds the supported maximum of 32 bits.
    WidthTooLarge {
        /// The rejected width.
        bits: u32,
    },
}

impl fmt::Display for UniverseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "universe width must be at least 1 bit"),
            Self::WidthTooLarge { bits } => write!(
                f,
                "universe width {bits} exceeds the supported maximum of {MAX_UNIVERSE_BITS} bits"
            ),
        }
    }
}

impl core::error::Error for UniverseError {}

/// Top-level storage layout, chosen at construction.
#[derive(Debug, Clone)]
enum Repr {
    /// Whole universe fits one machine word (width ≤ 6).
    Board(BitBoard),
    /// Recursive van Emde Boas tree.
    Tree(VebNode),
    /// Compacted layout: summary over the high half, flat leaves below.
    Compact(CompactVeb),
}

/// Ordered set of integers drawn from a fixed universe `[0, 2^bits)`.
///
/// Membership, insertion, deletion, successor and predecessor all run in
/// O(log log U) worst case for a universe of U keys; `min`/`max` are O(1).
/// The default layout is the memory-compacted one, which bounds storage by
/// O(U) bits; [`recursive`](VebSet::recursive) selects the textbook
/// recursive tree instead. Universes of at most 64 keys skip both and live
/// in a single word.
///
/// The set pre-checks membership before mutating, so `insert` and `remove`
/// are idempotent and report whether they changed anything; the inner
/// structures can then treat "key absent on insert, present on delete" as
/// a hard invariant.
///
/// # Example
/// ```
/// use veb_fast_set::VebSet;
///
/// let mut set = VebSet::new(16).unwrap();
/// set.insert(300);
/// set.insert(7);
/// assert_eq!(set.min(), Some(7));
/// assert_eq!(set.successor(7), Some(300));
/// assert!(!set.insert(300)); // already present
/// ```
#[derive(Debug, Clone)]
pub struct VebSet {
    bits: u32,
    len: usize,
    repr: Repr,
}

impl VebSet {
    /// Create an empty set over `[0, 2^bits)` in the default (compacted)
    /// layout.
    ///
    /// # Errors
    /// `bits` must lie in `1..=32`.
    pub fn new(bits: u32) -> Result<Self, UniverseError> {
        Self::with_repr(bits, false)
    }

    /// Create an empty set over `[0, 2^bits)` backed by the plain recursive
    /// tree instead of the compacted layout.
    ///
    /// Same contract and complexity as [`new`](VebSet::new); the recursive
    /// layout trades the hard O(U)-bit memory bound for pointer-chased
    /// clusters at every level.
    ///
    /// # Errors
    /// `bits` must lie in `1..=32`.
    pub fn recursive(bits: u32) -> Result<Self, UniverseError> {
        Self::with_repr(bits, true)
    }

    fn with_repr(bits: u32, recursive: bool) -> Result<Self, UniverseError> {
        if bits == 0 {
            return Err(UniverseError::ZeroWidth);
        }
        if bits > MAX_UNIVERSE_BITS {
            return Err(UniverseError::WidthTooLarge { bits });
        }
        let repr = if bits <= BOARD_BITS {
            Repr::Board(BitBoard::new())
        } else if recursive {
            Repr::Tree(VebNode::new(bits))
        } else {
            Repr::Compact(CompactVeb::new(bits))
        };
        Ok(VebSet { bits, len: 0, repr })
    }

    /// Universe width in bits.
    #[inline(always)]
    pub fn universe_bits(&self) -> u32 {
        self.bits
    }

    /// Number of keys in the universe (2^bits).
    #[inline(always)]
    pub fn universe(&self) -> u64 {
        universe_size(self.bits)
    }

    /// Number of stored keys. O(1).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` iff no key is stored. O(1).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn check_key(&self, key: u64) {
        assert!(
            key < self.universe(),
            "key {key} is outside the {}-bit universe",
            self.bits
        );
    }

    /// `true` iff `key` is stored.
    ///
    /// # Panics
    /// If `key` is outside the universe.
    pub fn contains(&self, key: u64) -> bool {
        self.check_key(key);
        match &self.repr {
            Repr::Board(board) => board.contains(key),
            Repr::Tree(tree) => tree.contains(key),
            Repr::Compact(compact) => compact.contains(key),
        }
    }

    /// Smallest stored key, or `None` when empty. O(1).
    pub fn min(&self) -> Option<u64> {
        match &self.repr {
            Repr::Board(board) => board.min(),
            Repr::Tree(tree) => tree.min(),
            Repr::Compact(compact) => compact.min(),
        }
    }

    /// Largest stored key, or `None` when empty. O(1).
    pub fn max(&self) -> Option<u64> {
        match &self.repr {
            Repr::Board(board) => board.max(),
            Repr::Tree(tree) => tree.max(),
            Repr::Compact(compact) => compact.max(),
        }
    }

    /// Smallest stored key strictly greater than `key`, or `None`.
    ///
    /// # Panics
    /// If `key` is outside the universe.
    pub fn successor(&self, key: u64) -> Option<u64> {
        self.check_key(key);
        match &self.repr {
            Repr::Board(board) => board.successor(key),
            Repr::Tree(tree) => tree.successor(key),
            Repr::Compact(compact) => compact.successor(key),
        }
    }

    /// Largest stored key strictly smaller than `key`, or `None`.
    ///
    /// # Panics
    /// If `key` is outside the universe.
    pub fn predecessor(&self, key: u64) -> Option<u64> {
        self.check_key(key);
        match &self.repr {
            Repr::Board(board) => board.predecessor(key),
            Repr::Tree(tree) => tree.predecessor(key),
            Repr::Compact(compact) => compact.predecessor(key),
        }
    }

    /// Insert `key`.
    ///
    /// # Returns
    /// `true` if the key was newly inserted, `false` if it was already
    /// present (the set is unchanged).
    ///
    /// # Panics
    /// If `key` is outside the universe.
    pub fn insert(&mut self, key: u64) -> bool {
        if self.contains(key) {
            return false;
        }
        match &mut self.repr {
            Repr::Board(board) => board.insert(key),
            Repr::Tree(tree) => tree.insert(key),
            Repr::Compact(compact) => compact.insert(key),
        }
        self.len += 1;
        true
    }

    /// Remove `key`.
    ///
    /// # Returns
    /// `true` if the key was removed, `false` if it was absent (the set is
    /// unchanged).
    ///
    /// # Panics
    /// If `key` is outside the universe.
    pub fn remove(&mut self, key: u64) -> bool {
        if !self.contains(key) {
            return false;
        }
        match &mut self.repr {
            Repr::Board(board) => board.delete(key),
            Repr::Tree(tree) => tree.delete(key),
            Repr::Compact(compact) => compact.delete(key),
        }
        self.len -= 1;
        true
    }

    /// Iterate over all stored keys in ascending order.
    ///
    /// O(log log U) per step via the successor walk.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Iterate over the stored keys inside `bounds`, ascending.
    ///
    /// Bounds beyond the universe are clamped, not rejected.
    pub fn range<R: core::ops::RangeBounds<u64>>(&self, bounds: R) -> Range<'_> {
        Range::new(self, bounds)
    }
}

impl<'a> IntoIterator for &'a VebSet {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
