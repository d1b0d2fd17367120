//! Recursive van Emde Boas node.

use alloc::vec;
use alloc::vec::Vec;

use crate::constants::{BOARD_BITS, MAX_UNIVERSE_BITS, NONE};
use crate::key::UniverseSplit;
use crate::tree::Child;

/// Recursive set over a `bits`-wide universe (`bits` ≥ 7).
///
/// The node stores its minimum in `low` only, never inside a cluster, so
/// inserting into an empty node and deleting the last key are O(1), and the
/// push-down on insert touches exactly one cluster. `high` mirrors the
/// maximum but IS stored in its cluster (unless it equals `low`), keeping
/// `max` O(1) without a second peeled key.
///
/// The summary child tracks exactly the non-empty cluster indices. Both the
/// summary and the clusters are allocated on first use and dropped the
/// moment they empty, so live memory follows occupancy.
///
/// Universes of six bits or fewer never reach this type; the factory and
/// the child allocator hand those to [`BitBoard`](crate::bits::BitBoard),
/// which subsumes the textbook tiny-universe base cases in one word.
///
/// # Preconditions
/// Keys passed in must lie in `[0, 2^bits)`, `insert` requires the key
/// absent and `delete` requires it present. The façade enforces all three;
/// this type treats them as invariants, and a broken structural invariant
/// aborts via `expect` rather than limping on.
#[derive(Debug, Clone)]
pub struct VebNode {
    /// Key decomposition for this universe width.
    split: UniverseSplit,

    /// Smallest member, `NONE` when the node is empty. Not stored in any
    /// cluster.
    low: u64,

    /// Largest member, `NONE` when the node is empty.
    high: u64,

    /// Set of non-empty cluster indices, over the high ⌈bits/2⌉ bits.
    /// Allocated on the first cluster insert, dropped when the last cluster
    /// empties.
    summary: Option<Child>,

    /// One slot per cluster index; `None` until a key lands in the cluster.
    clusters: Vec<Option<Child>>,
}

impl VebNode {
    /// Create an empty node for a `bits`-wide universe.
    ///
    /// The cluster table is sized 2^⌈bits/2⌉ up front (at most 2^16 slots);
    /// the children themselves are lazy.
    pub fn new(bits: u32) -> Self {
        debug_assert!(
            bits > BOARD_BITS && bits <= MAX_UNIVERSE_BITS,
            "node widths outside (6, 32] belong to the word leaf or are unsupported"
        );
        let split = UniverseSplit::new(bits);
        VebNode {
            split,
            low: NONE,
            high: NONE,
            summary: None,
            clusters: vec![None; split.cluster_count()],
        }
    }

    /// `true` iff no key is stored. O(1).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.low == NONE
    }

    /// Smallest stored key, or `None` when empty. O(1).
    #[inline(always)]
    pub fn min(&self) -> Option<u64> {
        if self.low == NONE {
            return None;
        }
        Some(self.low)
    }

    /// Largest stored key, or `None` when empty. O(1).
    #[inline(always)]
    pub fn max(&self) -> Option<u64> {
        if self.high == NONE {
            return None;
        }
        Some(self.high)
    }

    #[inline(always)]
    fn cluster(&self, index: u64) -> Option<&Child> {
        self.clusters[index as usize].as_ref()
    }

    /// `true` iff `key` is stored.
    ///
    /// Short-circuits on `low`/`high`, then descends into exactly one
    /// cluster. The sentinel sits above every valid key, so the comparisons
    /// cannot match an empty slot.
    pub fn contains(&self, key: u64) -> bool {
        if key == self.low || key == self.high {
            return true;
        }
        match self.cluster(self.split.high_of(key)) {
            Some(cluster) => cluster.contains(self.split.low_of(key)),
            None => false,
        }
    }

    /// Smallest stored key strictly greater than `key`, or `None`.
    ///
    /// Recurses into the key's own cluster when that cluster holds a larger
    /// member, otherwise asks the summary for the next live cluster and
    /// takes its minimum. Read-only: never allocates.
    pub fn successor(&self, key: u64) -> Option<u64> {
        if self.low != NONE && key < self.low {
            return Some(self.low);
        }
        let index = self.split.high_of(key);
        let offset = self.split.low_of(key);
        if let Some(cluster) = self.cluster(index) {
            if cluster.max().is_some_and(|max| offset < max) {
                let next = cluster
                    .successor(offset)
                    .expect("cluster max bounds the search");
                return Some(self.split.join(index, next));
            }
        }
        match self.summary.as_ref().and_then(|s| s.successor(index)) {
            Some(next_index) => {
                let min = self
                    .cluster(next_index)
                    .expect("summary lists only live clusters")
                    .min()
                    .expect("live clusters are non-empty");
                Some(self.split.join(next_index, min))
            }
            // No cluster past this one; `high` can still answer the query.
            None => {
                if self.high != NONE && key < self.high {
                    return Some(self.high);
                }
                None
            }
        }
    }

    /// Largest stored key strictly smaller than `key`, or `None`.
    ///
    /// Mirror of [`successor`](Self::successor), with one asymmetry: `low`
    /// is never stored in a cluster, so when the summary has no earlier
    /// cluster the answer can only be `low`.
    pub fn predecessor(&self, key: u64) -> Option<u64> {
        if self.high != NONE && key > self.high {
            return Some(self.high);
        }
        let index = self.split.high_of(key);
        let offset = self.split.low_of(key);
        if let Some(cluster) = self.cluster(index) {
            if cluster.min().is_some_and(|min| offset > min) {
                let prev = cluster
                    .predecessor(offset)
                    .expect("cluster min bounds the search");
                return Some(self.split.join(index, prev));
            }
        }
        match self.summary.as_ref().and_then(|s| s.predecessor(index)) {
            Some(prev_index) => {
                let max = self
                    .cluster(prev_index)
                    .expect("summary lists only live clusters")
                    .max()
                    .expect("live clusters are non-empty");
                Some(self.split.join(prev_index, max))
            }
            None => {
                if self.low != NONE && key > self.low {
                    return Some(self.low);
                }
                None
            }
        }
    }

    /// Store `key`.
    ///
    /// Precondition: `key` is absent. A key below the current minimum swaps
    /// with `low` and the old minimum is pushed down instead. When the
    /// target cluster is empty, the summary insert bottoms out in O(1)
    /// (its own target cluster is empty too) and the cluster insert is the
    /// O(1) empty-node case, so only one side of the recursion is ever
    /// non-trivial.
    pub fn insert(&mut self, mut key: u64) {
        if self.low == NONE {
            self.low = key;
            self.high = key;
            return;
        }
        if key < self.low {
            core::mem::swap(&mut key, &mut self.low);
        }
        let split = self.split;
        let index = split.high_of(key);
        let offset = split.low_of(key);
        let slot = &mut self.clusters[index as usize];
        if slot.is_none() {
            // The summary gains the index while its target cluster is still
            // empty, so this recursion bottoms out in O(1).
            self.summary
                .get_or_insert_with(|| Child::new(split.hi_bits()))
                .insert(index);
        }
        slot.get_or_insert_with(|| Child::new(split.lo_bits()))
            .insert(offset);
        if key > self.high {
            self.high = key;
        }
    }

    /// Remove `key`.
    ///
    /// Precondition: `key` is present. Deleting the minimum re-materializes
    /// the next smallest member as the new `low` and removes it from its
    /// cluster instead; an emptied cluster is dropped together with its
    /// summary entry, and `high` is recomputed from the summary maximum
    /// when the maximum was removed.
    pub fn delete(&mut self, mut key: u64) {
        if self.low == self.high {
            // Sole member (== key by precondition).
            self.low = NONE;
            self.high = NONE;
            return;
        }
        let split = self.split;
        if key == self.low {
            let first = self
                .summary
                .as_ref()
                .and_then(Child::min)
                .expect("non-singleton node keeps a populated summary");
            let offset = self
                .cluster(first)
                .expect("summary lists only live clusters")
                .min()
                .expect("live clusters are non-empty");
            key = split.join(first, offset);
            self.low = key;
        }
        let index = split.high_of(key);
        let offset = split.low_of(key);
        {
            let cluster = self.clusters[index as usize]
                .as_mut()
                .expect("deleting a stored key from a live cluster");
            cluster.delete(offset);
            if !cluster.is_empty() {
                if key == self.high {
                    let max = cluster.max().expect("cluster is non-empty");
                    self.high = split.join(index, max);
                }
                return;
            }
        }
        // Cluster emptied: drop it and its summary entry.
        self.clusters[index as usize] = None;
        let summary = self.summary.as_mut().expect("emptied cluster was tracked");
        summary.delete(index);
        if summary.is_empty() {
            self.summary = None;
        }
        if key == self.high {
            match self.summary.as_ref().and_then(Child::max) {
                Some(last) => {
                    let max = self
                        .cluster(last)
                        .expect("summary lists only live clusters")
                        .max()
                        .expect("live clusters are non-empty");
                    self.high = split.join(last, max);
                }
                None => self.high = self.low,
            }
        }
    }
}
