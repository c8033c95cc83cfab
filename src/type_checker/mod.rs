//! Type checking and semantic analysis module.
//!
//! This module resolves identifiers and operators against a scoped
//! identification table seeded with the standard environment, then
//! validates type and arity constraints over the parsed tree:
//!
//! - Assignment and call commands against entity and routine declarations
//! - Operator applications against operator signatures
//! - Conditions against the Boolean type
//! - Actual parameters against parameter-passing modes
//!
//! The checker annotates type and declaration slots in place and records
//! every semantic error through the shared reporter; it never aborts.

pub mod environment;
pub mod type_checker;
