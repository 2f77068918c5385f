//! Reporting and statistics module.
//!
//! Pure read-only aggregation over a finished token sequence: the
//! fixed-width token table and the token/error counts. Nothing here
//! transforms the stream.

pub mod report;
