//! Basic usage example for veb-fast-set.
//!
//! This example demonstrates the core functionality of the set.

use veb_fast_set::VebSet;

fn main() {
    println!("=== veb-fast-set - Basic Usage Example ===\n");

    // Create a new set over a 16-bit universe (keys 0..65536)
    let mut set = VebSet::new(16).unwrap();
    println!(
        "Created empty set over {} keys ({} bits)",
        set.universe(),
        set.universe_bits()
    );

    // Insert some keys
    println!("\nInserting keys: 100, 200, 150, 300");
    set.insert(100);
    set.insert(200);
    set.insert(150);
    set.insert(300);
    println!("Set now contains {} keys", set.len());

    // Check membership
    println!("\nMembership checks:");
    println!("  contains(150): {}", set.contains(150));
    println!("  contains(999): {}", set.contains(999));

    // Get min/max (O(1))
    println!("\nMin/Max (O(1)):");
    println!("  min: {:?}", set.min());
    println!("  max: {:?}", set.max());

    // Navigate the set
    println!("\nNavigation:");
    println!("  successor(100): {:?}", set.successor(100));
    println!("  successor(175): {:?}", set.successor(175));
    println!("  predecessor(200): {:?}", set.predecessor(200));
    println!("  predecessor(175): {:?}", set.predecessor(175));

    // Iterate in sorted order
    println!("\nIteration (sorted order):");
    print!("  Keys: ");
    for key in set.iter() {
        print!("{} ", key);
    }
    println!();

    // Range queries
    println!("\nRange queries:");
    let range: Vec<u64> = set.range(100..200).collect();
    println!("  range(100..200): {:?}", range);

    let range: Vec<u64> = set.range(100..=200).collect();
    println!("  range(100..=200): {:?}", range);

    // Remove keys
    println!("\nRemoving key 150:");
    set.remove(150);
    println!("  contains(150): {}", set.contains(150));
    println!("  len: {}", set.len());

    // Idempotence: the façade screens duplicates
    println!("\nIdempotence:");
    println!("  insert(100) again: {}", set.insert(100));
    println!("  remove(150) again: {}", set.remove(150));

    // Demonstrate with clustered data
    println!("\n=== Clustered Data Example ===\n");
    let mut clustered = VebSet::new(16).unwrap();

    println!("Inserting clustered ranges:");
    println!("  Range 1000-1099 (100 keys)");
    for key in 1000..1100 {
        clustered.insert(key);
    }

    println!("  Range 2000-2099 (100 keys)");
    for key in 2000..2100 {
        clustered.insert(key);
    }

    println!("\nClustered set stats:");
    println!("  Total keys: {}", clustered.len());
    println!("  Min: {:?}", clustered.min());
    println!("  Max: {:?}", clustered.max());

    // Walk across the gap between clusters
    println!("\nCrossing the gap:");
    println!("  successor(1099): {:?}", clustered.successor(1099));
    println!("  predecessor(2000): {:?}", clustered.predecessor(2000));

    // Range query across clusters
    println!("\nRange query across gap:");
    let gap_range: Vec<u64> = clustered.range(1095..2005).collect();
    println!("  range(1095..2005) has {} keys", gap_range.len());
    println!("  First 3: {:?}", &gap_range[0..3]);
    println!("  Last 3: {:?}", &gap_range[gap_range.len() - 3..]);

    // The recursive layout answers identically
    println!("\n=== Recursive Layout ===\n");
    let mut recursive = VebSet::recursive(16).unwrap();
    for key in [7u64, 42, 40_000] {
        recursive.insert(key);
    }
    println!("  min: {:?}", recursive.min());
    println!("  successor(42): {:?}", recursive.successor(42));

    println!("\n=== Example Complete ===");
}
