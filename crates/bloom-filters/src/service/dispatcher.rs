//! Operation Dispatcher
//!
//! Pulls lines from an [`OperationSource`], validates them and drives a
//! [`MembershipFilter`]. Query answers are written as `Y` / `N`, one per line.

use std::io::{self, Write};
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::operation::{parse_raw_line, Line, Operation};
use crate::error::OperationError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{MembershipFilter, OperationSource, SourceMode};

/// Message shown to interactive users for a malformed line
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Use + or ? followed by Latin letters (max 15)";

/// Message shown to interactive users for a line too short to hold an operation
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid format. Use: <+/? string>";

/// Shortest line that can carry an opcode, separator and token
const MIN_OPERATION_LEN: usize = 3;

/// Why a run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// A `#` line was read
    Sentinel,
    /// The source ran out of lines
    EndOfInput,
}

/// Counts for a single [`Dispatcher::run`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub inserts: u64,
    pub queries: u64,
    /// Queries answered `Y`
    pub positives: u64,
    /// Malformed lines skipped or reported
    pub rejected: u64,
    pub stop_reason: StopReason,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self {
            inserts: 0,
            queries: 0,
            positives: 0,
            rejected: 0,
            stop_reason: StopReason::EndOfInput,
        }
    }
}

/// Validates operation lines and calls into the filter
pub struct Dispatcher<F, W, M = NoOpMetrics> {
    filter: F,
    out: W,
    metrics: M,
}

impl<F: MembershipFilter, W: Write> Dispatcher<F, W, NoOpMetrics> {
    /// Create a dispatcher writing query answers to `out`
    pub fn new(filter: F, out: W) -> Self {
        Self {
            filter,
            out,
            metrics: NoOpMetrics,
        }
    }
}

impl<F: MembershipFilter, W: Write, M: MetricsRecorder> Dispatcher<F, W, M> {
    /// Replace the metrics recorder
    pub fn with_metrics<N: MetricsRecorder>(self, metrics: N) -> Dispatcher<F, W, N> {
        Dispatcher {
            filter: self.filter,
            out: self.out,
            metrics,
        }
    }

    /// Apply one validated operation
    ///
    /// Returns the answer for queries, `None` for inserts.
    pub fn dispatch(&mut self, op: &Operation) -> io::Result<Option<bool>> {
        match op {
            Operation::Insert(token) => {
                let start = Instant::now();
                self.filter.insert(token);
                self.metrics.record_insert(start.elapsed());
                Ok(None)
            }
            Operation::Query(token) => {
                let start = Instant::now();
                let found = self.filter.contains(token);
                self.metrics.record_lookup(start.elapsed(), found);
                writeln!(self.out, "{}", if found { 'Y' } else { 'N' })?;
                Ok(Some(found))
            }
        }
    }

    /// Process lines until the sentinel or end of input
    ///
    /// Nothing past the terminating line is read from `source`. Malformed
    /// lines, blank or undecodable ones included, never end the run; source
    /// I/O errors do.
    pub fn run<S: OperationSource + ?Sized>(&mut self, source: &mut S) -> io::Result<RunSummary> {
        let mode = source.mode();
        let mut summary = RunSummary::default();

        while let Some(raw) = source.next_line() {
            let raw = raw?;

            match parse_raw_line(&raw) {
                Ok(Line::Sentinel) => {
                    summary.stop_reason = StopReason::Sentinel;
                    break;
                }
                Ok(Line::Operation(op)) => match self.dispatch(&op)? {
                    None => summary.inserts += 1,
                    Some(found) => {
                        summary.queries += 1;
                        if found {
                            summary.positives += 1;
                        }
                    }
                },
                Err(err) => {
                    summary.rejected += 1;
                    self.metrics.record_rejected();
                    let line = String::from_utf8_lossy(&raw);
                    match mode {
                        SourceMode::Interactive => {
                            debug!(%line, error = %err, "Rejected interactive line");
                            writeln!(self.out, "{}", interactive_message(&line, &err))?;
                        }
                        SourceMode::Batch => {
                            debug!(%line, error = %err, "Skipped malformed line");
                        }
                    }
                }
            }

            // Interactive users should see answers as they type
            if mode == SourceMode::Interactive {
                self.out.flush()?;
            }
        }

        self.out.flush()?;
        info!(
            inserts = summary.inserts,
            queries = summary.queries,
            positives = summary.positives,
            rejected = summary.rejected,
            stop_reason = ?summary.stop_reason,
            "Operation stream finished"
        );
        Ok(summary)
    }

    /// The filter being driven
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// The metrics recorder
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Consume the dispatcher, returning the filter and writer
    pub fn into_parts(self) -> (F, W) {
        (self.filter, self.out)
    }
}

/// Pick the message for a rejected interactive line
fn interactive_message(line: &str, err: &OperationError) -> &'static str {
    if *err == OperationError::InvalidEncoding {
        INVALID_INPUT_MESSAGE
    } else if line.trim().chars().count() < MIN_OPERATION_LEN {
        INVALID_FORMAT_MESSAGE
    } else {
        INVALID_INPUT_MESSAGE
    }
}
