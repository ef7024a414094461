//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Hash functions
//! - Parameter calculations
//! - Configuration
//! - Operation line parsing
//!
//! RULES:
//! - No I/O operations
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod operation;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder, DEFAULT_CAPACITY, DEFAULT_FALSE_POSITIVE_RATE};
pub use operation::{
    parse_line, parse_raw_line, validate_token, Line, Operation, MAX_TOKEN_LEN, SENTINEL,
};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
