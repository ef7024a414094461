//! # Bloom Filters
//!
//! Approximate-membership set for short alphabetic tokens, plus the
//! operation-stream interpreter that drives it.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `BloomFilter`: Core probabilistic data structure
//!   - `BloomConfig`: Configuration with validation
//!   - `Operation` / `parse_line`: The `<+|?> <token>` line format
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilter`: Driving port (insert / contains)
//!   - `OperationSource`: Driven port (where lines come from)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `Dispatcher`: Validates lines and drives the filter
//!
//! - **Adapters Layer** (`adapters/`): Line sources
//!   - `InteractiveSource`: stdin or any `BufRead`
//!   - `BatchFileSource`: prepared stream on disk
//!
//! - `generator`: seeded random test streams
//!
//! ## Invariants
//!
//! - No false negatives - if inserted, contains() MUST return true
//! - m and k never change after construction
//! - Bits are never cleared
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filters::{BloomFilter, Dispatcher, BatchSource};
//! use std::io::Cursor;
//!
//! let filter = BloomFilter::new(1_000, 0.01)?;
//! let mut dispatcher = Dispatcher::new(filter, Vec::new());
//! let mut source = BatchSource::from_reader(Cursor::new("+ cat\n? cat\n#\n"));
//!
//! let summary = dispatcher.run(&mut source)?;
//! assert_eq!(summary.queries, 1);
//!
//! let (_, out) = dispatcher.into_parts();
//! assert_eq!(out, b"Y\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{BatchFileSource, BatchSource, InteractiveSource};
pub use domain::{
    parse_line, parse_raw_line, BloomConfig, BloomConfigBuilder, BloomFilter, Line, Operation,
};
pub use error::{FilterError, GeneratorError, OperationError, SourceError};
pub use generator::{GeneratedStats, OperationGenerator, MAX_OPERATIONS};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{MembershipFilter, OperationSource, SourceMode};
pub use service::{Dispatcher, RunSummary, StopReason};
