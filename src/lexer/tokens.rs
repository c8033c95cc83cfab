use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("begin", TokenKind::Begin);
        map.insert("do", TokenKind::Do);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("for", TokenKind::For);
        map.insert("forever", TokenKind::Forever);
        map.insert("if", TokenKind::If);
        map.insert("in", TokenKind::In);
        map.insert("let", TokenKind::Let);
        map.insert("nothing", TokenKind::Nothing);
        map.insert("then", TokenKind::Then);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map
    };
}

/// The characters that form single-character operator tokens.
pub const OPERATOR_CHARS: &[char] = &[
    '+', '-', '*', '/', '=', '<', '>', '\\', '&', '@', '%', '^', '?',
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eot,
    IntLiteral,
    CharLiteral,
    Identifier,
    Operator,

    OpenParen,
    CloseParen,
    Comma,
    Tilde,
    Colon,
    Becomes, // :=

    // Reserved
    Begin,
    Do,
    Else,
    End,
    For,
    Forever,
    If,
    In,
    Let,
    Nothing,
    Then,
    Var,
    While,

    Error,
}

impl TokenKind {
    /// Human-readable name used in "expected X, found Y" diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Eot => "end of text",
            TokenKind::IntLiteral => "an integer literal",
            TokenKind::CharLiteral => "a character literal",
            TokenKind::Identifier => "an identifier",
            TokenKind::Operator => "an operator",
            TokenKind::OpenParen => "\"(\"",
            TokenKind::CloseParen => "\")\"",
            TokenKind::Comma => "\",\"",
            TokenKind::Tilde => "\"~\"",
            TokenKind::Colon => "\":\"",
            TokenKind::Becomes => "\":=\"",
            TokenKind::Begin => "\"begin\"",
            TokenKind::Do => "\"do\"",
            TokenKind::Else => "\"else\"",
            TokenKind::End => "\"end\"",
            TokenKind::For => "\"for\"",
            TokenKind::Forever => "\"forever\"",
            TokenKind::If => "\"if\"",
            TokenKind::In => "\"in\"",
            TokenKind::Let => "\"let\"",
            TokenKind::Nothing => "\"nothing\"",
            TokenKind::Then => "\"then\"",
            TokenKind::Var => "\"var\"",
            TokenKind::While => "\"while\"",
            TokenKind::Error => "an invalid token",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexical unit: kind, exact spelling and start position.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub spelling: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, spelling: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            spelling: spelling.into(),
            position,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::CharLiteral
            | TokenKind::Operator => write!(f, "{} ({})", self.kind, self.spelling),
            _ => write!(f, "{}", self.kind),
        }
    }
}
