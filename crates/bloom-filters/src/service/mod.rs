//! Service Layer
//!
//! Orchestrates domain logic: the dispatcher reads lines through the
//! source port and drives the filter through the membership port.

pub mod dispatcher;

pub use dispatcher::{
    Dispatcher, RunSummary, StopReason, INVALID_FORMAT_MESSAGE, INVALID_INPUT_MESSAGE,
};
