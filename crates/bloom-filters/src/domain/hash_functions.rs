//! Hash functions for Bloom filter
//!
//! Every probe is an independent 32-bit MurmurHash3 (x86_32) of the item,
//! seeded with the probe index.

use std::io::Cursor;

/// Hash an element with 32-bit MurmurHash3 and return the signed result
///
/// The signed view matches the common `mmh3.hash` convention, so the
/// positions derived from it are interchangeable with other
/// implementations of the same scheme.
pub fn murmur_hash(element: &[u8], seed: u32) -> i32 {
    let mut cursor = Cursor::new(element);

    // Reading from an in-memory cursor cannot fail
    let hash = murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0);
    hash as i32
}

/// Reduce a signed hash to a bit position in `[0, m)`
///
/// Floor modulo keeps negative hashes in range without a separate
/// absolute-value step.
pub fn reduce(hash: i32, m: usize) -> usize {
    (hash as i64).rem_euclid(m as i64) as usize
}

/// Compute k hash positions for an element
///
/// Probe `i` uses seed `i`: h_i(x) = murmur3_32(x, i) mod m.
pub fn compute_hash_positions(element: &[u8], k: usize, m: usize) -> Vec<usize> {
    (0..k)
        .map(|seed| reduce(murmur_hash(element, seed as u32), m))
        .collect()
}
