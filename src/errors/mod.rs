//! Error types for the analyzer's collaborators.
//!
//! The analysis core never raises: every lexical malformation becomes an
//! error token inside the stream. The types here cover the excluded
//! collaborator concerns only - file access and CLI invocation.

pub mod errors;
