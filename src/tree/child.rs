//! Child dispatch: word leaf below seven bits, recursive node above.

use alloc::boxed::Box;

use crate::bits::BitBoard;
use crate::constants::BOARD_BITS;
use crate::tree::VebNode;

/// One child of a vEB node: either the word-level base case or a boxed
/// recursive node, chosen by universe width at allocation time.
///
/// Ownership is strictly tree-shaped; a child lives in exactly one parent
/// slot and is dropped when its cluster empties.
#[derive(Debug, Clone)]
pub enum Child {
    /// Universe fits one machine word (width ≤ 6 bits).
    Board(BitBoard),
    /// Wider universe, handled recursively.
    Node(Box<VebNode>),
}

impl Child {
    /// Allocate an empty child for a `bits`-wide universe.
    #[inline]
    pub fn new(bits: u32) -> Self {
        if bits <= BOARD_BITS {
            Child::Board(BitBoard::new())
        } else {
            Child::Node(Box::new(VebNode::new(bits)))
        }
    }

    /// `true` iff no key is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Child::Board(board) => board.is_empty(),
            Child::Node(node) => node.is_empty(),
        }
    }

    /// `true` iff `key` is stored.
    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        match self {
            Child::Board(board) => board.contains(key),
            Child::Node(node) => node.contains(key),
        }
    }

    /// Smallest stored key, or `None` when empty.
    #[inline]
    pub fn min(&self) -> Option<u64> {
        match self {
            Child::Board(board) => board.min(),
            Child::Node(node) => node.min(),
        }
    }

    /// Largest stored key, or `None` when empty.
    #[inline]
    pub fn max(&self) -> Option<u64> {
        match self {
            Child::Board(board) => board.max(),
            Child::Node(node) => node.max(),
        }
    }

    /// Smallest stored key strictly greater than `key`, or `None`.
    #[inline]
    pub fn successor(&self, key: u64) -> Option<u64> {
        match self {
            Child::Board(board) => board.successor(key),
            Child::Node(node) => node.successor(key),
        }
    }

    /// Largest stored key strictly smaller than `key`, or `None`.
    #[inline]
    pub fn predecessor(&self, key: u64) -> Option<u64> {
        match self {
            Child::Board(board) => board.predecessor(key),
            Child::Node(node) => node.predecessor(key),
        }
    }

    /// Store `key`.
    ///
    /// Precondition: `key` is absent (the node-level caller guarantees it).
    #[inline]
    pub fn insert(&mut self, key: u64) {
        match self {
            Child::Board(board) => board.insert(key),
            Child::Node(node) => node.insert(key),
        }
    }

    /// Remove `key`.
    ///
    /// Precondition: `key` is present (the node-level caller guarantees it).
    #[inline]
    pub fn delete(&mut self, key: u64) {
        match self {
            Child::Board(board) => board.delete(key),
            Child::Node(node) => node.delete(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_picks_representation() {
        assert!(matches!(Child::new(1), Child::Board(_)));
        assert!(matches!(Child::new(6), Child::Board(_)));
        assert!(matches!(Child::new(7), Child::Node(_)));
        assert!(matches!(Child::new(16), Child::Node(_)));
    }

    #[test]
    fn test_dispatch_board() {
        let mut child = Child::new(5);
        assert!(child.is_empty());
        child.insert(3);
        child.insert(17);
        assert!(child.contains(3));
        assert_eq!(child.min(), Some(3));
        assert_eq!(child.max(), Some(17));
        assert_eq!(child.successor(3), Some(17));
        assert_eq!(child.predecessor(17), Some(3));
        child.delete(3);
        child.delete(17);
        assert!(child.is_empty());
    }

    #[test]
    fn test_dispatch_node() {
        let mut child = Child::new(8);
        assert!(child.is_empty());
        child.insert(200);
        child.insert(9);
        assert!(child.contains(200));
        assert_eq!(child.min(), Some(9));
        assert_eq!(child.max(), Some(200));
        assert_eq!(child.successor(9), Some(200));
        assert_eq!(child.predecessor(200), Some(9));
        child.delete(9);
        child.delete(200);
        assert!(child.is_empty());
    }
}
