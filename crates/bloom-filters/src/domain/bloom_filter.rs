//! Core Bloom Filter implementation
//!
//! INVARIANTS:
//! - m and k are fixed at construction, even past `capacity` insertions
//! - Bits only ever transition 0 -> 1
//! - No false negatives: if inserted, contains() MUST return true

use bitvec::prelude::*;
use tracing::{debug, warn};

use super::config::BloomConfig;
use super::hash_functions::compute_hash_positions;
use super::parameters::{calculate_fpr, calculate_optimal_parameters, required_bits};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing of strings
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Expected number of distinct elements
    capacity: usize,
    /// Target false positive rate at `capacity` elements
    target_fpr: f64,
    /// Number of hash functions (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of insert calls (n)
    n: usize,
}

impl BloomFilter {
    /// Create a filter sized for `capacity` elements at `false_positive_rate`
    ///
    /// # Errors
    /// Returns [`FilterError`] if `capacity` is zero, the rate is not
    /// strictly between 0 and 1, or the resulting bit array would be larger
    /// than a bit vector can address.
    pub fn new(capacity: usize, false_positive_rate: f64) -> Result<Self, FilterError> {
        BloomConfig {
            capacity,
            false_positive_rate,
        }
        .validate()?;

        let bits = required_bits(capacity, false_positive_rate);
        let max_bits = BitSlice::<u8, Lsb0>::MAX_BITS;
        if !bits.is_finite() || bits > max_bits as f64 {
            return Err(FilterError::InvalidParameters(format!(
                "{} elements at rate {} need {} bits (max {})",
                capacity, false_positive_rate, bits, max_bits
            )));
        }

        let params = calculate_optimal_parameters(capacity, false_positive_rate);
        debug!(
            capacity,
            false_positive_rate,
            size_bits = params.size_bits,
            hash_count = params.hash_count,
            "Sized Bloom filter"
        );

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; params.size_bits],
            capacity,
            target_fpr: false_positive_rate,
            k: params.hash_count,
            m: params.size_bits,
            n: 0,
        })
    }

    /// Create a filter from a configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        Self::new(config.capacity, config.false_positive_rate)
    }

    /// Bit positions probed for `element`, one per hash function
    ///
    /// Deterministic: the same element always maps to the same positions
    /// for a given (m, k).
    pub fn hash_positions(&self, element: &str) -> Vec<usize> {
        compute_hash_positions(element.as_bytes(), self.k, self.m)
    }

    /// Insert an element into the filter
    ///
    /// After insertion, `contains(element)` is guaranteed to return true.
    pub fn insert(&mut self, element: &str) {
        for pos in self.hash_positions(element) {
            self.bits.set(pos, true);
        }
        self.n = self.n.saturating_add(1);

        if self.n.checked_sub(1) == Some(self.capacity) {
            warn!(
                capacity = self.capacity,
                "Bloom filter exceeded its capacity; false positive rate will rise"
            );
        }
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set (never false negative)
    pub fn contains(&self, element: &str) -> bool {
        self.hash_positions(element)
            .into_iter()
            .all(|pos| self.bits[pos])
    }

    /// Theoretical false positive rate at the current insert count
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_false_positive_rate(&self) -> f64 {
        calculate_fpr(self.m, self.n, self.k)
    }

    /// Whether the bit at `pos` is set; `false` when out of range
    pub fn is_bit_set(&self, pos: usize) -> bool {
        self.bits.get(pos).map(|bit| *bit).unwrap_or(false)
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the configured target false positive rate
    pub fn false_positive_rate(&self) -> f64 {
        self.target_fpr
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Get the number of insert calls so far
    pub fn elements_inserted(&self) -> usize {
        self.n
    }

    /// Whether more elements were inserted than the filter was sized for
    pub fn is_over_capacity(&self) -> bool {
        self.n > self.capacity
    }

    #[cfg(test)]
    fn set_bit_indices(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}
