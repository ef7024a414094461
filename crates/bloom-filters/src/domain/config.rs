//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filters::domain::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .capacity(10_000)
//!     .false_positive_rate(0.05)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.capacity, 10_000);
//! ```

use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::FilterError;

/// Default expected number of distinct items
pub const DEFAULT_CAPACITY: usize = 1_000_000;

/// Default target false positive rate
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;

/// Environment variable overriding the capacity
pub const ENV_CAPACITY: &str = "BLOOM_CAPACITY";

/// Environment variable overriding the false positive rate
pub const ENV_FALSE_POSITIVE_RATE: &str = "BLOOM_FALSE_POSITIVE_RATE";

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Expected maximum number of distinct items
    pub capacity: usize,
    /// Target false positive rate at `capacity` insertions, in (0, 1)
    pub false_positive_rate: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            false_positive_rate: DEFAULT_FALSE_POSITIVE_RATE,
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, false_positive_rate: f64) -> Result<Self, FilterError> {
        let config = Self {
            capacity,
            false_positive_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `BLOOM_CAPACITY` / `BLOOM_FALSE_POSITIVE_RATE`
    ///
    /// Unparsable values are ignored with a warning. The result is not
    /// validated; call [`validate`](Self::validate) before use.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CAPACITY) {
            match raw.trim().parse() {
                Ok(capacity) => config.capacity = capacity,
                Err(_) => warn!(value = %raw, "Ignoring unparsable {}", ENV_CAPACITY),
            }
        }

        if let Some(raw) = lookup(ENV_FALSE_POSITIVE_RATE) {
            match raw.trim().parse() {
                Ok(fpr) => config.false_positive_rate = fpr,
                Err(_) => warn!(value = %raw, "Ignoring unparsable {}", ENV_FALSE_POSITIVE_RATE),
            }
        }

        config
    }

    /// Validate construction parameters
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.capacity == 0 {
            return Err(FilterError::InvalidCapacity {
                capacity: self.capacity,
            });
        }

        // Rejects NaN as well, since every comparison with NaN is false
        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(FilterError::InvalidFalsePositiveRate {
                fpr: self.false_positive_rate,
            });
        }

        Ok(())
    }

    /// Builder-style method to set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style method to set the false positive rate
    pub fn with_false_positive_rate(mut self, fpr: f64) -> Self {
        self.false_positive_rate = fpr;
        self
    }
}

/// Builder for BloomConfig with validation
///
/// Unset fields fall back to [`BloomConfig::default`].
#[derive(Default)]
pub struct BloomConfigBuilder {
    capacity: Option<usize>,
    false_positive_rate: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected number of distinct items
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the target false positive rate
    pub fn false_positive_rate(mut self, fpr: f64) -> Self {
        self.false_positive_rate = Some(fpr);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let defaults = BloomConfig::default();

        let config = BloomConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            false_positive_rate: self
                .false_positive_rate
                .unwrap_or(defaults.false_positive_rate),
        };

        config.validate()?;
        Ok(config)
    }
}
