//! Interactive line source
//!
//! Wraps any buffered reader (stdin in the CLI). Malformed lines from this
//! source are reported back to the user rather than skipped.

use std::io::{self, BufRead};

use super::read_raw_line;
use crate::ports::{OperationSource, SourceMode};

/// Line source for a person typing operations
pub struct InteractiveSource<R> {
    reader: R,
}

impl<R: BufRead> InteractiveSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl InteractiveSource<io::StdinLock<'static>> {
    /// Read from the process's standard input
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> OperationSource for InteractiveSource<R> {
    fn next_line(&mut self) -> Option<io::Result<Vec<u8>>> {
        read_raw_line(&mut self.reader)
    }

    fn mode(&self) -> SourceMode {
        SourceMode::Interactive
    }
}
