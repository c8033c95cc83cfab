#![allow(clippy::module_inception)]

//! Front end for the Mini-Triangle teaching language.
//!
//! The pipeline is three sequential passes sharing one error reporter:
//! a character-driven scanner, a one-token-lookahead recursive-descent
//! parser, and a type checker that annotates the tree in place. No pass
//! aborts on error; every diagnostic is recorded and surfaced at the end.

use std::fmt::Display;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod type_checker;

/// A (line, column) location in the source text, both 1-based.
///
/// `Position::null()` marks entities with no source location, such as the
/// declarations of the standard environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// The "no source location" sentinel.
    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            write!(f, "<builtin>")
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Runs the full front end over `source` and returns the annotated AST root.
///
/// All diagnostics land in `reporter`; the caller decides whether the run is
/// rejected by inspecting `reporter.has_errors()` afterwards.
pub fn run_frontend(source: &str, reporter: &mut errors::errors::ErrorReporter) -> ast::Command {
    let tokens = lexer::lexer::scan(lexer::source::StringSource::new(source), reporter);
    let program = parser::parser::parse(tokens, reporter);

    let mut checker = type_checker::type_checker::Checker::new();
    checker.check(&program, reporter);

    program
}
