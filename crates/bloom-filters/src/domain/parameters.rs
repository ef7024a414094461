//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = ceil(-n*ln(fpr) / (ln(2)^2))  -- optimal bits
//! - k = round((m/n) * ln(2))          -- optimal hash functions, at least 1
//!
//! Callers are expected to validate `n >= 1` and `0 < fpr < 1` first; see
//! [`BloomConfig::validate`](super::config::BloomConfig::validate).

use std::f64::consts::LN_2;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter
    pub size_bits: usize,
    /// Number of hash functions
    pub hash_count: usize,
    /// Theoretical false positive rate once `num_elements` items are inserted
    pub expected_fpr: f64,
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `num_elements` - Expected number of elements to insert (n)
/// * `target_fpr` - Target false positive rate
pub fn calculate_optimal_parameters(num_elements: usize, target_fpr: f64) -> BloomFilterParams {
    let m = minimum_bits(num_elements, target_fpr);
    let k = optimal_k(m, num_elements);

    BloomFilterParams {
        size_bits: m,
        hash_count: k,
        expected_fpr: calculate_fpr(m, num_elements, k),
    }
}

/// Unrounded-to-integer bit count for n and target FPR
///
/// Kept as `f64` so callers can reject sizes no bit array can hold before
/// the cast to `usize` saturates.
pub fn required_bits(n: usize, target_fpr: f64) -> f64 {
    let ln2_squared = LN_2 * LN_2;
    (-(n as f64) * target_fpr.ln() / ln2_squared).ceil()
}

/// Calculate minimum m for given n and target FPR, never less than one bit
pub fn minimum_bits(n: usize, target_fpr: f64) -> usize {
    (required_bits(n, target_fpr) as usize).max(1)
}

/// Calculate optimal k for given m and n
///
/// The closed form rounds to zero when m is small relative to n; a filter
/// with no probes would answer `true` for everything, so k is clamped to 1.
pub fn optimal_k(m: usize, n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    let k = ((m as f64 / n as f64) * LN_2).round() as usize;
    k.max(1)
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
