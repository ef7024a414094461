//! # Bloom CLI
//!
//! Terminal front end for the `bloom-filters` crate: interactive and batch
//! operation streams, plus the random test-stream generator.

pub mod app;
pub mod args;

pub use app::Outcome;
pub use args::{Args, Command};
