//! # Bloom Membership Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (insert / contains / dispatch)
//! └── src/
//!     └── integration/  # Generator → file → dispatcher flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bloom-tests
//!
//! # Benchmarks
//! cargo bench -p bloom-tests
//! ```

pub mod integration;
