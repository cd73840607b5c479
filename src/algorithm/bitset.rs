use bitvec::prelude::*;
use std::fmt;

use crate::math::random::Exclusion;

/// Fixed-size bitset of candidate indices at one cell
///
/// Indices are 0-based positions in the cell's candidate list. Provides O(1)
/// membership testing and doubles as the exclusion set for random draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Create a set over `len` candidates with none present
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![0; len],
        }
    }

    /// Insert a candidate index; indices past the end are ignored
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Test candidate membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of candidates the set ranges over
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Test if no candidates are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test if every candidate is present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Count candidates in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all present indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl Exclusion for CandidateSet {
    fn excludes(&self, value: usize) -> bool {
        self.contains(value)
    }

    fn excluded_count(&self, bound: usize) -> usize {
        self.bits
            .get(..bound.min(self.bits.len()))
            .map_or(0, |bits| bits.count_ones())
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CandidateSet({} of {}: {:?})",
            self.count(),
            self.capacity(),
            self.to_vec()
        )
    }
}
