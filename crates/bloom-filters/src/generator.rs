//! Random operation-stream generator
//!
//! Produces test streams in the dispatcher's line format. Randomness comes
//! from an explicitly passed [`Rng`], so a seeded generator reproduces the
//! same stream byte for byte.

use std::collections::HashSet;
use std::io::Write;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::domain::operation::{Operation, MAX_TOKEN_LEN, SENTINEL};
use crate::error::GeneratorError;

/// Largest stream the generator accepts
pub const MAX_OPERATIONS: usize = 1_000_000;

/// Probability that an operation is an insert
pub const INSERT_PROBABILITY: f64 = 0.6;

/// Probability that a query targets an already-inserted token
pub const EXISTING_QUERY_PROBABILITY: f64 = 0.7;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Counts for a generated stream
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedStats {
    pub inserts: usize,
    pub queries: usize,
    /// Queries that reuse an inserted token
    pub existing_queries: usize,
}

/// Check a requested stream length
pub fn validate_operation_count(count: usize) -> Result<usize, GeneratorError> {
    if count == 0 || count > MAX_OPERATIONS {
        return Err(GeneratorError::InvalidOperationCount {
            count,
            max: MAX_OPERATIONS,
        });
    }
    Ok(count)
}

/// Writes random insert/query streams
pub struct OperationGenerator<R> {
    rng: R,
    /// Distinct inserted tokens in first-insert order, so existing-token
    /// queries pick uniformly and reproducibly
    inserted: Vec<String>,
    seen: HashSet<String>,
}

impl<R: Rng> OperationGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            inserted: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Random ASCII-letter token of length 1..=15
    pub fn random_token(&mut self) -> String {
        let len = self.rng.gen_range(1..=MAX_TOKEN_LEN);
        (0..len)
            .map(|_| LETTERS[self.rng.gen_range(0..LETTERS.len())] as char)
            .collect()
    }

    /// Draw the next operation
    pub fn next_operation(&mut self) -> (Operation, bool) {
        if self.rng.gen_bool(INSERT_PROBABILITY) {
            let token = self.random_token();
            if self.seen.insert(token.clone()) {
                self.inserted.push(token.clone());
            }
            return (Operation::Insert(token), false);
        }

        if !self.inserted.is_empty() && self.rng.gen_bool(EXISTING_QUERY_PROBABILITY) {
            if let Some(token) = self.inserted.choose(&mut self.rng) {
                return (Operation::Query(token.clone()), true);
            }
        }

        (Operation::Query(self.random_token()), false)
    }

    /// Write `num_operations` lines followed by the sentinel
    pub fn generate(
        &mut self,
        num_operations: usize,
        out: &mut impl Write,
    ) -> Result<GeneratedStats, GeneratorError> {
        validate_operation_count(num_operations)?;

        let mut stats = GeneratedStats::default();
        for _ in 0..num_operations {
            let (op, existing) = self.next_operation();
            match op {
                Operation::Insert(_) => stats.inserts += 1,
                Operation::Query(_) => {
                    stats.queries += 1;
                    if existing {
                        stats.existing_queries += 1;
                    }
                }
            }
            writeln!(out, "{}", op)?;
        }
        writeln!(out, "{}", SENTINEL)?;
        out.flush()?;

        info!(
            operations = num_operations,
            inserts = stats.inserts,
            queries = stats.queries,
            "Generated operation stream"
        );
        Ok(stats)
    }

    /// Distinct tokens inserted so far
    pub fn inserted(&self) -> &[String] {
        &self.inserted
    }
}
