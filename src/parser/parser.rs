use crate::{
    ast::commands::Command,
    errors::errors::{ErrorKind, ErrorReporter},
    lexer::tokens::{Token, TokenKind},
};

use super::cmd::parse_command;

/// The main parser structure: the token stream, the cursor into it, and
/// the shared error reporter.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    pub(super) reporter: &'a mut ErrorReporter,
}

impl<'a> Parser<'a> {
    /// `tokens` must be a scanner output: non-empty and Eot-terminated.
    pub fn new(tokens: Vec<Token>, reporter: &'a mut ErrorReporter) -> Self {
        debug_assert!(matches!(
            tokens.last().map(|t| t.kind),
            Some(TokenKind::Eot)
        ));
        Parser {
            tokens,
            pos: 0,
            reporter,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        // The Eot terminator keeps the cursor in bounds.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances past the current token and returns it.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// On a mismatch the syntax error is recorded and the cursor stays
    /// put; a synthesized error token at the current position is returned
    /// so the caller can continue as if the expected token were present.
    pub fn accept(&mut self, expected: TokenKind) -> Token {
        if self.current_kind() == expected {
            self.advance()
        } else {
            let found = self.current_token().spelling.clone();
            let position = self.current_token().position;
            self.reporter.report(
                ErrorKind::UnexpectedToken {
                    expected: expected.describe().to_string(),
                    found,
                },
                position,
            );
            Token::new(TokenKind::Error, "", position)
        }
    }
}

/// Parses a scanner's token stream into the program's root command.
///
/// Syntax errors are recorded through the reporter and never abort the
/// parse; error nodes stand in for unparseable constructs.
pub fn parse(tokens: Vec<Token>, reporter: &mut ErrorReporter) -> Command {
    let mut parser = Parser::new(tokens, reporter);

    let program = parse_command(&mut parser);
    parser.accept(TokenKind::Eot);

    program
}
