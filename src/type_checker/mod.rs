//! Type checking module.
//!
//! This module performs the one static check the analyzer carries out on
//! the scanned token stream:
//!
//! - Recording declared variable types from `type-keyword identifier`
//!   pairs
//! - Flagging assignments whose literal contradicts the declared type
//!
//! Integer-typed variables reject real literals; boolean- and text-typed
//! variables accept only their own literal class. Violations are emitted
//! as error tokens, never as failures.

pub mod type_checker;
