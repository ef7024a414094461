//! Cross-module flows: generated streams run through the file source and
//! dispatcher, and the observed false positive rate of a loaded filter.

pub mod flows;
