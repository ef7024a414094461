//! Error types for the Bloom filter crate

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing a filter
///
/// These are fatal: a filter with invalid parameters is never created.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Invalid capacity: {capacity} (must be at least 1)")]
    InvalidCapacity { capacity: usize },

    #[error("Invalid false positive rate: {fpr} (must be strictly between 0 and 1)")]
    InvalidFalsePositiveRate { fpr: f64 },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),
}

/// A line that does not satisfy the `<+|?> <token>` format
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Empty line")]
    EmptyLine,

    #[error("Line is not valid UTF-8")]
    InvalidEncoding,

    #[error("Unknown opcode: {0:?}")]
    UnknownOpcode(char),

    #[error("Missing space between opcode and token")]
    MissingSeparator,

    #[error("Empty token")]
    EmptyToken,

    #[error("Token too long: {len} > {max}")]
    TokenTooLong { len: usize, max: usize },

    #[error("Token is not ASCII alphabetic: {0:?}")]
    NonAlphabetic(String),
}

/// Errors from operation sources
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File {} not found", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors from the operation-stream generator
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid number of operations: {count} (must be between 1 and {max})")]
    InvalidOperationCount { count: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
