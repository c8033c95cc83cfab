use crate::errors::errors::{ErrorKind, ErrorReporter};

use super::{
    source::SourceReader,
    tokens::{Token, TokenKind, OPERATOR_CHARS, RESERVED_LOOKUP},
};

/// Character-driven scanner over a `SourceReader`.
pub struct Scanner<R: SourceReader> {
    reader: R,
    tokens: Vec<Token>,
}

impl<R: SourceReader> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            tokens: Vec::new(),
        }
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Skips whitespace and `!` line comments.
    fn skip_separators(&mut self) {
        loop {
            match self.reader.current_char() {
                ' ' | '\t' | '\n' | '\r' => self.reader.advance(),
                '!' => self.reader.skip_to_end_of_line(),
                _ => break,
            }
        }
    }

    /// Scans the token starting at the current character.
    fn scan_token(&mut self, reporter: &mut ErrorReporter) {
        let position = self.reader.position();
        let c = self.reader.current_char();

        if c.is_ascii_alphabetic() {
            let mut spelling = String::new();
            while self.reader.current_char().is_ascii_alphanumeric() {
                spelling.push(self.reader.current_char());
                self.reader.advance();
            }
            let kind = RESERVED_LOOKUP
                .get(spelling.as_str())
                .copied()
                .unwrap_or(TokenKind::Identifier);
            self.push(Token::new(kind, spelling, position));
        } else if c.is_ascii_digit() {
            let mut spelling = String::new();
            while self.reader.current_char().is_ascii_digit() {
                spelling.push(self.reader.current_char());
                self.reader.advance();
            }
            self.push(Token::new(TokenKind::IntLiteral, spelling, position));
        } else if OPERATOR_CHARS.contains(&c) {
            self.reader.advance();
            self.push(Token::new(TokenKind::Operator, c.to_string(), position));
        } else {
            match c {
                '(' => {
                    self.reader.advance();
                    self.push(Token::new(TokenKind::OpenParen, "(", position));
                }
                ')' => {
                    self.reader.advance();
                    self.push(Token::new(TokenKind::CloseParen, ")", position));
                }
                ',' => {
                    self.reader.advance();
                    self.push(Token::new(TokenKind::Comma, ",", position));
                }
                '~' => {
                    self.reader.advance();
                    self.push(Token::new(TokenKind::Tilde, "~", position));
                }
                ':' => {
                    self.reader.advance();
                    if self.reader.current_char() == '=' {
                        self.reader.advance();
                        self.push(Token::new(TokenKind::Becomes, ":=", position));
                    } else {
                        self.push(Token::new(TokenKind::Colon, ":", position));
                    }
                }
                '\'' => self.scan_char_literal(reporter),
                other => {
                    self.reader.advance();
                    reporter.report(
                        ErrorKind::UnrecognisedCharacter { character: other },
                        position,
                    );
                    self.push(Token::new(TokenKind::Error, other.to_string(), position));
                }
            }
        }
    }

    /// Scans `'c'`. A missing closing quote yields an error token; the
    /// enclosed character is kept as the spelling either way.
    fn scan_char_literal(&mut self, reporter: &mut ErrorReporter) {
        let position = self.reader.position();
        self.reader.advance(); // opening quote

        let enclosed = self.reader.current_char();
        if !self.reader.at_eot() {
            self.reader.advance();
        }

        if self.reader.current_char() == '\'' {
            self.reader.advance();
            self.push(Token::new(
                TokenKind::CharLiteral,
                enclosed.to_string(),
                position,
            ));
        } else {
            reporter.report(ErrorKind::UnterminatedCharLiteral, position);
            self.push(Token::new(TokenKind::Error, enclosed.to_string(), position));
        }
    }

    /// Consumes the whole input and returns the token list, terminated by
    /// exactly one end-of-text token.
    pub fn scan_all(mut self, reporter: &mut ErrorReporter) -> Vec<Token> {
        loop {
            self.skip_separators();
            if self.reader.at_eot() {
                break;
            }
            self.scan_token(reporter);
        }

        let position = self.reader.position();
        self.push(Token::new(TokenKind::Eot, "", position));
        self.tokens
    }
}

/// Tokenizes `reader` into a finite token sequence ending in Eot.
pub fn scan<R: SourceReader>(reader: R, reporter: &mut ErrorReporter) -> Vec<Token> {
    Scanner::new(reader).scan_all(reporter)
}
