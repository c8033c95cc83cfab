//! Error types and error reporting for the front end.
//!
//! This module defines the diagnostic types shared by every pass:
//!
//! - Error kinds for the lexical, syntactic and semantic phases
//! - Error structures with source position information
//! - The append-only `ErrorReporter` threaded through all three passes

pub mod errors;
