//! Outbound Ports (Driven Ports)
//!
//! Where operation lines come from. The interpreter only sees this trait,
//! so it is decoupled from stdin, files, or in-memory test fixtures.

use std::io;

/// How a source wants malformed lines handled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceMode {
    /// A person is typing: report the problem and keep reading
    Interactive,
    /// Reading a prepared stream: skip the line silently
    Batch,
}

/// Line sequence producer (Driven Port)
pub trait OperationSource {
    /// Next raw line without its terminator, `None` at end of input
    ///
    /// Lines are bytes: decoding is the interpreter's job, so an
    /// undecodable line is a malformed operation rather than an I/O error.
    fn next_line(&mut self) -> Option<io::Result<Vec<u8>>>;

    /// Error-handling mode for lines from this source
    fn mode(&self) -> SourceMode;
}

impl<S: OperationSource + ?Sized> OperationSource for &mut S {
    fn next_line(&mut self) -> Option<io::Result<Vec<u8>>> {
        (**self).next_line()
    }

    fn mode(&self) -> SourceMode {
        (**self).mode()
    }
}
