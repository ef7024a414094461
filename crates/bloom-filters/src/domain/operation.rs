//! Operation-stream line format
//!
//! Each line is `<opcode><space><token>`:
//! - `+` inserts the token, `?` queries it
//! - tokens are 1-15 ASCII letters
//! - a line consisting of `#` ends the stream

use std::fmt;

use crate::error::OperationError;

/// Longest accepted token
pub const MAX_TOKEN_LEN: usize = 15;

/// Stream terminator
pub const SENTINEL: &str = "#";

/// Opcode for inserts
pub const INSERT_OPCODE: char = '+';

/// Opcode for queries
pub const QUERY_OPCODE: char = '?';

/// A validated filter operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Insert(String),
    Query(String),
}

impl Operation {
    /// The token the operation applies to
    pub fn token(&self) -> &str {
        match self {
            Operation::Insert(token) | Operation::Query(token) => token,
        }
    }

    pub fn opcode(&self) -> char {
        match self {
            Operation::Insert(_) => INSERT_OPCODE,
            Operation::Query(_) => QUERY_OPCODE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.opcode(), self.token())
    }
}

/// One parsed line of the stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Operation(Operation),
    Sentinel,
}

/// Parse a single stream line
pub fn parse_line(raw: &str) -> Result<Line, OperationError> {
    let line = raw.trim();
    if line == SENTINEL {
        return Ok(Line::Sentinel);
    }

    let mut chars = line.chars();
    let opcode = chars.next().ok_or(OperationError::EmptyLine)?;

    let make: fn(String) -> Operation = match opcode {
        INSERT_OPCODE => Operation::Insert,
        QUERY_OPCODE => Operation::Query,
        other => return Err(OperationError::UnknownOpcode(other)),
    };

    let rest = chars.as_str();
    // "+" alone has nothing after the opcode (the trailing space was trimmed)
    if rest.is_empty() {
        return Err(OperationError::EmptyToken);
    }
    let token = rest
        .strip_prefix(' ')
        .ok_or(OperationError::MissingSeparator)?
        .trim();

    validate_token(token)?;
    Ok(Line::Operation(make(token.to_string())))
}

/// Parse a line read as raw bytes
///
/// Bytes that are not valid UTF-8 are a malformed line, like any other.
pub fn parse_raw_line(raw: &[u8]) -> Result<Line, OperationError> {
    let line = std::str::from_utf8(raw).map_err(|_| OperationError::InvalidEncoding)?;
    parse_line(line)
}

/// Check a token against the 1-15 ASCII letter rule
pub fn validate_token(token: &str) -> Result<(), OperationError> {
    if token.is_empty() {
        return Err(OperationError::EmptyToken);
    }
    if !token.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(OperationError::NonAlphabetic(token.to_string()));
    }
    // All ASCII at this point, so byte length equals character count
    if token.len() > MAX_TOKEN_LEN {
        return Err(OperationError::TokenTooLong {
            len: token.len(),
            max: MAX_TOKEN_LEN,
        });
    }
    Ok(())
}
