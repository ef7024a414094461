//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - membership API called by the interpreter
//! - Driven Ports (outbound) - line sources feeding the interpreter

pub mod inbound;
pub mod outbound;

pub use inbound::MembershipFilter;
pub use outbound::{OperationSource, SourceMode};
