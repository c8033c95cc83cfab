//! Parser module for building the Abstract Syntax Tree.
//!
//! This module contains the recursive-descent parser that transforms the
//! token stream into an AST. One token of lookahead, no backtracking:
//!
//! - Command and declaration parsing (`cmd`)
//! - Expression and parameter parsing (`expr`)
//! - The core `Parser` state and `accept` machinery (`parser`)
//!
//! Recovery is local and minimal: a failed `accept` records the syntax
//! error, does not consume the unexpected token, and parsing proceeds as
//! if the expected token had been present. One malformed input may
//! therefore produce several diagnostics.

pub mod cmd;
pub mod expr;
pub mod parser;

#[cfg(test)]
mod tests;
