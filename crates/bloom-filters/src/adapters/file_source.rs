//! Batch file line source
//!
//! Reads a prepared operation stream. Malformed lines from this source are
//! skipped silently by the dispatcher.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, error};

use super::read_raw_line;
use crate::error::SourceError;
use crate::ports::{OperationSource, SourceMode};

/// Line source for a prepared stream
///
/// A source built by [`BatchSource::empty`] yields no lines.
pub struct BatchSource<R> {
    reader: Option<R>,
}

/// Batch source backed by a file on disk
pub type BatchFileSource = BatchSource<BufReader<File>>;

impl<R: BufRead> BatchSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }

    /// A source with no operations
    pub fn empty() -> Self {
        Self { reader: None }
    }
}

impl BatchSource<BufReader<File>> {
    /// Open `path` for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Opened batch input");
        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Open `path`, or report the failure to `out` and fall back to an
    /// empty stream so the caller can finish cleanly
    pub fn open_or_empty(path: impl AsRef<Path>, out: &mut impl Write) -> io::Result<Self> {
        match Self::open(path) {
            Ok(source) => Ok(source),
            Err(err) => {
                error!(error = %err, "Batch input unavailable");
                writeln!(out, "Error: {}", err)?;
                Ok(Self::empty())
            }
        }
    }
}

impl<R: BufRead> OperationSource for BatchSource<R> {
    fn next_line(&mut self) -> Option<io::Result<Vec<u8>>> {
        read_raw_line(self.reader.as_mut()?)
    }

    fn mode(&self) -> SourceMode {
        SourceMode::Batch
    }
}
