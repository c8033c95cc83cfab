use crate::{
    ast::{
        ast::{CharacterLiteral, Identifier, IntegerLiteral, Operator},
        expressions::{Expression, Parameter},
    },
    errors::errors::ErrorKind,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// `expression := primary-expression (operator primary-expression)*`
///
/// Left-associative with a single precedence class: the operator chain
/// folds flatly into binary-expression nodes.
pub fn parse_expression(parser: &mut Parser) -> Expression {
    let mut left = parse_primary_expression(parser);

    while parser.current_kind() == TokenKind::Operator {
        let operator = parse_operator(parser);
        let right = parse_primary_expression(parser);
        let pos = left.pos();
        left = Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            ty: Expression::new_slot(),
            pos,
        };
    }

    left
}

pub fn parse_primary_expression(parser: &mut Parser) -> Expression {
    match parser.current_kind() {
        TokenKind::IntLiteral => {
            let token = parser.advance();
            Expression::IntegerLiteral {
                literal: IntegerLiteral {
                    spelling: token.spelling,
                    pos: token.position,
                },
                ty: Expression::new_slot(),
                pos: token.position,
            }
        }
        TokenKind::CharLiteral => {
            let token = parser.advance();
            Expression::CharacterLiteral {
                literal: CharacterLiteral {
                    spelling: token.spelling,
                    pos: token.position,
                },
                ty: Expression::new_slot(),
                pos: token.position,
            }
        }
        TokenKind::Identifier => {
            let identifier = parse_identifier(parser);
            let pos = identifier.pos;
            if parser.current_kind() == TokenKind::OpenParen {
                parser.advance();
                let actual = parse_parameter(parser);
                parser.accept(TokenKind::CloseParen);
                Expression::Call {
                    callee: identifier,
                    actual: Box::new(actual),
                    ty: Expression::new_slot(),
                    pos,
                }
            } else {
                Expression::Identifier {
                    identifier,
                    ty: Expression::new_slot(),
                    pos,
                }
            }
        }
        TokenKind::Operator => {
            let operator = parse_operator(parser);
            let pos = operator.pos;
            let operand = parse_primary_expression(parser);
            Expression::Unary {
                operator,
                operand: Box::new(operand),
                ty: Expression::new_slot(),
                pos,
            }
        }
        TokenKind::OpenParen => {
            parser.advance();
            let inner = parse_expression(parser);
            parser.accept(TokenKind::CloseParen);
            // Parenthesized expressions return the inner node unwrapped.
            inner
        }
        _ => {
            let found = parser.current_token().spelling.clone();
            let pos = parser.current_token().position;
            parser
                .reporter
                .report(ErrorKind::ExpectedExpression { found }, pos);
            Expression::Error { pos }
        }
    }
}

/// `parameter := | 'var' identifier | expression`
///
/// The closing bracket signals the blank parameter; it stays unconsumed
/// for the caller's `accept`.
pub fn parse_parameter(parser: &mut Parser) -> Parameter {
    match parser.current_kind() {
        TokenKind::CloseParen => Parameter::Blank {
            pos: parser.current_token().position,
        },
        TokenKind::Var => {
            let token = parser.advance();
            let identifier = parse_identifier(parser);
            Parameter::VarRef {
                identifier,
                ty: Expression::new_slot(),
                pos: token.position,
            }
        }
        _ => {
            let expression = parse_expression(parser);
            let pos = expression.pos();
            Parameter::Expr {
                expression,
                ty: Expression::new_slot(),
                pos,
            }
        }
    }
}

pub fn parse_identifier(parser: &mut Parser) -> Identifier {
    let token = parser.accept(TokenKind::Identifier);
    Identifier::new(token.spelling, token.position)
}

pub fn parse_operator(parser: &mut Parser) -> Operator {
    let token = parser.accept(TokenKind::Operator);
    Operator::new(token.spelling, token.position)
}
