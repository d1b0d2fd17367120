//! Core constants for veb-fast-set.

/// Sentinel value for an absent key.
///
/// Used to indicate:
/// - Empty `low`/`high` slot in a tree node or compact container
/// - "Not found" inside internal search paths before the `Option` boundary
///
/// Keys are bounded by `1 << MAX_UNIVERSE_BITS`, so the sentinel can never
/// collide with a stored key.
pub const NONE: u64 = u64::MAX;

/// Number of bits in one machine word (one `BitBoard` leaf)
pub const WORD_BITS: u32 = 64;

/// Widest universe a single-word leaf can hold (2^6 = 64 keys)
pub const BOARD_BITS: u32 = 6;

/// Widest supported universe (keys in [0, 2^32))
pub const MAX_UNIVERSE_BITS: u32 = 32;
