//! Deduplication of emitted candidates
//!
//! Duplicate seed words, or letters whose case forms coincide, make the same
//! string appear at several ranks. With `--unique` the repeats are dropped
//! from the output after windowing, so ranks themselves never shift.
//! - Memory: exact, grows with the number of unique candidates
//! - Bloom: fixed size, may treat a few unique candidates as repeats

use ahash::RandomState;
use hashbrown::HashSet;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::cli::DedupStrategy;

/// Trait for deduplication implementations
pub trait Deduplicator {
    /// Record an item; returns true if it was not seen before
    fn insert(&mut self, item: &str) -> bool;

    /// Number of unique items recorded
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Approximate memory usage in bytes
    fn memory_usage(&self) -> usize;
}

/// In-memory HashSet-based deduplicator
pub struct MemoryDeduplicator {
    set: HashSet<String, RandomState>,
}

impl MemoryDeduplicator {
    pub fn new() -> Self {
        Self {
            set: HashSet::with_hasher(RandomState::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }
}

impl Default for MemoryDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Deduplicator for MemoryDeduplicator {
    fn insert(&mut self, item: &str) -> bool {
        if self.set.contains(item) {
            return false;
        }
        self.set.insert(item.to_string())
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn memory_usage(&self) -> usize {
        // Rough: String header plus content per entry, plus table slots
        self.set.iter().map(|s| 24 + s.len()).sum::<usize>() + self.set.capacity() * 8
    }
}

/// Bloom filter-based deduplicator
pub struct BloomDeduplicator {
    bits: Vec<u64>,
    num_hashes: usize,
    hasher: RandomState,
    count: usize,
}

impl BloomDeduplicator {
    /// Create a new bloom filter
    ///
    /// # Arguments
    /// * `expected_items` - Expected number of unique items
    /// * `false_positive_rate` - Desired false positive rate (e.g., 0.001 for 0.1%)
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Self {
        let expected_items = expected_items.max(1);
        let ln2 = std::f64::consts::LN_2;

        // m = -n * ln(p) / (ln(2)^2)
        let num_bits = (-(expected_items as f64) * false_positive_rate.ln() / (ln2 * ln2)).ceil() as usize;
        let num_bits = num_bits.max(64);

        // k = (m/n) * ln(2)
        let num_hashes = ((num_bits as f64 / expected_items as f64) * ln2).ceil() as usize;
        let num_hashes = num_hashes.clamp(1, 16);

        Self {
            bits: vec![0; num_bits.div_ceil(64)],
            num_hashes,
            hasher: RandomState::new(),
            count: 0,
        }
    }

    fn hash_indices(&self, item: &str) -> impl Iterator<Item = usize> {
        let num_bits = self.bits.len() * 64;

        // Double hashing
        let mut hasher1 = self.hasher.build_hasher();
        item.hash(&mut hasher1);
        let h1 = hasher1.finish() as usize;

        let mut hasher2 = self.hasher.build_hasher();
        hasher2.write_usize(h1);
        item.hash(&mut hasher2);
        let h2 = hasher2.finish() as usize;

        (0..self.num_hashes).map(move |i| h1.wrapping_add(i.wrapping_mul(h2)) % num_bits)
    }

    fn get_bit(&self, index: usize) -> bool {
        self.bits[index / 64] & (1u64 << (index % 64)) != 0
    }
}

impl Deduplicator for BloomDeduplicator {
    fn insert(&mut self, item: &str) -> bool {
        let indices: Vec<usize> = self.hash_indices(item).collect();

        if indices.iter().all(|&i| self.get_bit(i)) {
            return false;
        }

        for index in indices {
            self.bits[index / 64] |= 1u64 << (index % 64);
        }
        self.count += 1;
        true
    }

    fn len(&self) -> usize {
        self.count
    }

    fn memory_usage(&self) -> usize {
        self.bits.len() * 8
    }
}

/// No-op deduplicator for when deduplication is disabled
#[derive(Default)]
pub struct NoOpDeduplicator {
    count: usize,
}

impl NoOpDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deduplicator for NoOpDeduplicator {
    fn insert(&mut self, _item: &str) -> bool {
        self.count += 1;
        true
    }

    fn len(&self) -> usize {
        self.count
    }

    fn memory_usage(&self) -> usize {
        0
    }
}

/// Upper bound on the bloom filter's sizing estimate
const MAX_BLOOM_ITEMS: u128 = 1 << 24;

/// Upper bound on the hash set's initial capacity
const MAX_PREALLOC: u128 = 1 << 16;

/// Build the deduplicator for a run of `window_len` candidates
pub fn create_deduplicator(
    unique: bool,
    strategy: DedupStrategy,
    window_len: u128,
) -> Box<dyn Deduplicator> {
    if !unique {
        return Box::new(NoOpDeduplicator::new());
    }

    match strategy {
        DedupStrategy::Memory => {
            let capacity = window_len.min(MAX_PREALLOC) as usize;
            Box::new(MemoryDeduplicator::with_capacity(capacity))
        }
        DedupStrategy::Bloom => {
            let expected = window_len.min(MAX_BLOOM_ITEMS) as usize;
            Box::new(BloomDeduplicator::new(expected, 0.001))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_deduplicator() {
        let mut dedup = MemoryDeduplicator::new();

        assert!(dedup.insert("p4ss"));
        assert!(dedup.insert("P4ss"));
        assert!(!dedup.insert("p4ss"));

        assert_eq!(dedup.len(), 2);
        assert!(dedup.insert("pass"));
        assert!(dedup.memory_usage() > 0);
    }

    #[test]
    fn test_bloom_deduplicator() {
        let mut dedup = BloomDeduplicator::new(1000, 0.01);

        assert!(dedup.insert("test1"));
        assert!(dedup.insert("test2"));
        assert!(!dedup.insert("test1"));

        assert!(!dedup.insert("test2"));
        assert_eq!(dedup.len(), 2);
        assert_eq!(dedup.memory_usage() % 8, 0);
    }

    #[test]
    fn test_noop_deduplicator() {
        let mut dedup = NoOpDeduplicator::new();

        assert!(dedup.insert("test1"));
        assert!(dedup.insert("test1"));

        assert_eq!(dedup.len(), 2);
        assert_eq!(dedup.memory_usage(), 0);
    }

    #[test]
    fn test_factory() {
        let mut dedup = create_deduplicator(false, DedupStrategy::Memory, 10);
        assert!(dedup.insert("b"));
        assert!(dedup.insert("b"));

        let mut dedup = create_deduplicator(true, DedupStrategy::Memory, 10);
        assert!(dedup.insert("b"));
        assert!(!dedup.insert("b"));

        let mut dedup = create_deduplicator(true, DedupStrategy::Bloom, 1000);
        assert!(dedup.insert("b"));
        assert!(!dedup.insert("b"));
    }
}
