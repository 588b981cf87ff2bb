use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-capacity bitset over word identifiers within one length bucket
///
/// Word identifiers are zero-based indices into the bucket. Provides O(1)
/// membership testing and word-parallel intersection for pattern queries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordBitset {
    bits: BitVec,
    capacity: usize,
}

impl WordBitset {
    /// Create a bitset with no words present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Create a bitset containing every word in the bucket
    pub fn all(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
            capacity,
        }
    }

    /// Insert a word identifier, ignoring ids beyond the capacity
    pub fn insert(&mut self, word_id: usize) {
        if word_id < self.capacity {
            self.bits.set(word_id, true);
        }
    }

    /// Test word membership
    pub fn contains(&self, word_id: usize) -> bool {
        self.bits.get(word_id).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no words are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count words in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over the word identifiers present, in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all word identifiers as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for WordBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordBitset({} words: {:?})", self.count(), self.to_vec())
    }
}
