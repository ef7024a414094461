//! Adapters Layer (Driven Adapters)
//!
//! Implementations of the [`OperationSource`](crate::ports::OperationSource)
//! port.
//!
//! ## Adapters
//!
//! - `InteractiveSource` - lines typed by a person (stdin)
//! - `BatchSource` / `BatchFileSource` - prepared streams, usually a file

pub mod file_source;
pub mod interactive;

pub use file_source::{BatchFileSource, BatchSource};
pub use interactive::InteractiveSource;

use std::io::{self, BufRead};

/// Read one line as raw bytes, stripping `\n` or `\r\n`
///
/// Returns `None` at end of input.
pub(crate) fn read_raw_line<R: BufRead>(reader: &mut R) -> Option<io::Result<Vec<u8>>> {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf) {
        Ok(0) => None,
        Ok(_) => {
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            Some(Ok(buf))
        }
        Err(err) => Some(Err(err)),
    }
}
