//! End-to-end scenarios exercising the public surface of `VebSet`.

use veb_fast_set::VebSet;

/// Both layouts must honour the same contract; every scenario runs twice.
fn both_layouts(bits: u32) -> Vec<VebSet> {
    vec![VebSet::new(bits).unwrap(), VebSet::recursive(bits).unwrap()]
}

#[test]
fn full_two_bit_universe() {
    for mut set in both_layouts(2) {
        for key in 0..4u64 {
            assert!(set.insert(key));
        }
        assert_eq!(set.min(), Some(0));
        assert_eq!(set.max(), Some(3));
        assert_eq!(set.successor(0), Some(1));
        assert_eq!(set.successor(1), Some(2));
        assert_eq!(set.successor(2), Some(3));
        assert_eq!(set.successor(3), None);
    }
}

#[test]
fn drain_two_bit_universe() {
    for mut set in both_layouts(2) {
        for key in 0..4u64 {
            set.insert(key);
        }
        assert!(set.remove(1));
        assert_eq!(set.successor(0), Some(2));
        assert!(set.remove(2));
        assert_eq!(set.successor(0), Some(3));
        assert!(set.remove(3));
        assert_eq!(set.successor(0), None);
        assert!(set.remove(0));
        assert!(set.is_empty());
    }
}

#[test]
fn scattered_four_bit_universe() {
    for mut set in both_layouts(4) {
        for key in [5u64, 9, 2, 14] {
            set.insert(key);
        }
        assert_eq!(set.min(), Some(2));
        assert_eq!(set.max(), Some(14));
        assert_eq!(set.successor(2), Some(5));
        assert_eq!(set.successor(5), Some(9));
        assert_eq!(set.successor(9), Some(14));
        assert_eq!(set.successor(14), None);
        assert_eq!(set.predecessor(9), Some(5));
        assert_eq!(set.predecessor(2), None);
    }
}

#[test]
fn odd_keys_in_six_bit_universe() {
    for mut set in both_layouts(6) {
        for key in (1..64u64).step_by(2) {
            set.insert(key);
        }
        let walked: Vec<u64> = set.iter().collect();
        let expected: Vec<u64> = (1..64u64).step_by(2).collect();
        assert_eq!(walked, expected);
        assert!(!set.contains(0));
        assert!(set.contains(1));
        assert!(!set.contains(62));
        assert!(set.contains(63));
    }
}

#[test]
fn saturate_ten_bit_universe() {
    for mut set in both_layouts(10) {
        for key in 0..1024u64 {
            assert!(set.insert(key));
        }
        assert_eq!(set.len(), 1024);
        for key in 0..1024u64 {
            assert!(set.contains(key), "missing {key}");
        }
        for key in (0..1024u64).rev() {
            assert!(set.remove(key));
        }
        assert!(set.is_empty());
        for key in 0..1024u64 {
            assert!(!set.contains(key));
        }
    }
}

#[test]
fn universe_endpoints_eight_bits() {
    for mut set in both_layouts(8) {
        set.insert(0);
        set.insert(255);
        assert_eq!(set.min(), Some(0));
        assert_eq!(set.max(), Some(255));
        assert!(set.remove(0));
        assert_eq!(set.min(), Some(255));
        assert_eq!(set.max(), Some(255));
        assert!(set.remove(255));
        assert!(set.is_empty());
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }
}

#[test]
fn one_bit_universe() {
    for mut set in both_layouts(1) {
        assert!(set.is_empty());
        assert!(set.insert(1));
        assert_eq!(set.min(), Some(1));
        assert_eq!(set.predecessor(1), None);
        assert!(set.insert(0));
        assert_eq!(set.min(), Some(0));
        assert_eq!(set.max(), Some(1));
        assert_eq!(set.successor(0), Some(1));
        assert!(set.remove(1));
        assert_eq!(set.max(), Some(0));
        assert!(set.remove(0));
        assert!(set.is_empty());
    }
}

#[test]
fn delete_low_with_two_members() {
    for mut set in both_layouts(8) {
        set.insert(10);
        set.insert(200);
        assert!(set.remove(10));
        assert_eq!(set.min(), Some(200));
        assert_eq!(set.max(), Some(200));
        assert!(set.contains(200));
        assert!(!set.contains(10));
    }
}

#[test]
fn delete_high_with_populated_cluster() {
    // The maximum shares its cluster with another member; removing it must
    // promote that neighbour, not a key from an earlier cluster.
    for mut set in both_layouts(8) {
        for key in [3u64, 200, 201] {
            set.insert(key);
        }
        assert!(set.remove(201));
        assert_eq!(set.max(), Some(200));
        assert_eq!(set.successor(3), Some(200));
    }
}

#[test]
fn reinsert_after_drain() {
    for mut set in both_layouts(12) {
        for round in 0..3 {
            for key in [0u64, 17, 1000, 4095] {
                assert!(set.insert(key), "round {round}");
            }
            for key in [0u64, 17, 1000, 4095] {
                assert!(set.remove(key), "round {round}");
            }
            assert!(set.is_empty(), "round {round}");
        }
    }
}

#[test]
fn successor_probe_inside_last_cluster() {
    // Probes landing inside the last occupied cluster, above its stored
    // members, must still see the maximum.
    for mut set in both_layouts(8) {
        set.insert(2);
        set.insert(250);
        set.insert(252);
        assert_eq!(set.successor(251), Some(252));
        assert_eq!(set.successor(252), None);
        assert_eq!(set.successor(253), None);
    }
}

#[test]
fn wide_universe_smoke() {
    // Full 32-bit width: far-apart keys, both layouts
    for mut set in both_layouts(32) {
        for key in [0u64, 1, 1 << 16, (1 << 31) + 5, u32::MAX as u64] {
            assert!(set.insert(key));
        }
        assert_eq!(set.min(), Some(0));
        assert_eq!(set.max(), Some(u32::MAX as u64));
        assert_eq!(set.successor(1), Some(1 << 16));
        assert_eq!(set.predecessor(1 << 16), Some(1));
        assert_eq!(set.successor((1 << 31) + 5), Some(u32::MAX as u64));
        assert!(set.remove(u32::MAX as u64));
        assert_eq!(set.max(), Some((1 << 31) + 5));
    }
}
