//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - The `SourceReader` character-input boundary
//! - Recognition of keywords, identifiers, literals and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! Scanning never aborts: an unrecognisable character becomes an error
//! token, the mistake is recorded, and scanning continues.

pub mod lexer;
pub mod source;
pub mod tokens;
