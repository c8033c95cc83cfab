use crate::{
    ast::{
        ast::{Identifier, TypeDenoter},
        commands::Command,
        declarations::Declaration,
    },
    errors::errors::ErrorKind,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expression, parse_identifier, parse_parameter},
    parser::Parser,
};

/// `command := single-command (',' single-command)*`
///
/// A single child is returned directly; two or more fold left into
/// sequential-command nodes.
pub fn parse_command(parser: &mut Parser) -> Command {
    let mut command = parse_single_command(parser);

    while parser.current_kind() == TokenKind::Comma {
        parser.advance();
        let next = parse_single_command(parser);
        let pos = command.pos();
        command = Command::Sequential {
            first: Box::new(command),
            second: Box::new(next),
            pos,
        };
    }

    command
}

pub fn parse_single_command(parser: &mut Parser) -> Command {
    match parser.current_kind() {
        TokenKind::Nothing => {
            let token = parser.advance();
            Command::Blank {
                pos: token.position,
            }
        }
        TokenKind::Identifier => parse_assignment_or_call(parser),
        TokenKind::If => {
            let token = parser.advance();
            let condition = parse_expression(parser);
            parser.accept(TokenKind::Then);
            let then_branch = parse_single_command(parser);
            parser.accept(TokenKind::Else);
            let else_branch = parse_single_command(parser);
            Command::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
                pos: token.position,
            }
        }
        TokenKind::While => {
            let token = parser.advance();
            if parser.current_kind() == TokenKind::Forever {
                parser.advance();
                parser.accept(TokenKind::Do);
                let body = parse_single_command(parser);
                Command::WhileForever {
                    body: Box::new(body),
                    pos: token.position,
                }
            } else {
                let condition = parse_expression(parser);
                parser.accept(TokenKind::Do);
                let body = parse_single_command(parser);
                Command::While {
                    condition,
                    body: Box::new(body),
                    pos: token.position,
                }
            }
        }
        TokenKind::For => {
            let token = parser.advance();
            parser.accept(TokenKind::OpenParen);
            let init = parse_single_command(parser);
            parser.accept(TokenKind::Comma);
            let condition = parse_expression(parser);
            parser.accept(TokenKind::Comma);
            let step = parse_single_command(parser);
            parser.accept(TokenKind::CloseParen);
            parser.accept(TokenKind::Do);
            let body = parse_single_command(parser);
            Command::For {
                init: Box::new(init),
                condition,
                step: Box::new(step),
                body: Box::new(body),
                pos: token.position,
            }
        }
        TokenKind::Let => {
            let token = parser.advance();
            let declaration = parse_declaration(parser);
            parser.accept(TokenKind::In);
            let body = parse_single_command(parser);
            Command::Let {
                declaration,
                body: Box::new(body),
                pos: token.position,
            }
        }
        TokenKind::Begin => {
            parser.advance();
            let inner = parse_command(parser);
            parser.accept(TokenKind::End);
            // `begin C end` brackets the command; no wrapper node.
            inner
        }
        _ => {
            let found = parser.current_token().spelling.clone();
            let pos = parser.current_token().position;
            parser.reporter.report(ErrorKind::ExpectedCommand { found }, pos);
            Command::Error { pos }
        }
    }
}

/// Disambiguates `V := E` from `I ( AP )` after an identifier.
fn parse_assignment_or_call(parser: &mut Parser) -> Command {
    let identifier = parse_identifier(parser);
    let pos = identifier.pos;

    match parser.current_kind() {
        TokenKind::Becomes => {
            parser.advance();
            let value = parse_expression(parser);
            Command::Assign {
                target: identifier,
                value,
                pos,
            }
        }
        TokenKind::OpenParen => {
            parser.advance();
            let actual = parse_parameter(parser);
            parser.accept(TokenKind::CloseParen);
            Command::Call {
                callee: identifier,
                actual,
                pos,
            }
        }
        _ => {
            let found = parser.current_token().spelling.clone();
            let error_pos = parser.current_token().position;
            parser.reporter.report(
                ErrorKind::MalformedAssignOrCall {
                    identifier: identifier.spelling,
                    found,
                },
                error_pos,
            );
            Command::Error { pos: error_pos }
        }
    }
}

/// `declaration := single-declaration (',' single-declaration)*`
pub fn parse_declaration(parser: &mut Parser) -> Declaration {
    let mut declaration = parse_single_declaration(parser);

    while parser.current_kind() == TokenKind::Comma {
        parser.advance();
        let next = parse_single_declaration(parser);
        let pos = declaration.pos();
        declaration = Declaration::Sequential {
            first: Box::new(declaration),
            second: Box::new(next),
            pos,
        };
    }

    declaration
}

/// `single-declaration := identifier '~' expression | identifier ':' type-denoter`
pub fn parse_single_declaration(parser: &mut Parser) -> Declaration {
    if parser.current_kind() != TokenKind::Identifier {
        let found = parser.current_token().spelling.clone();
        let pos = parser.current_token().position;
        parser
            .reporter
            .report(ErrorKind::ExpectedDeclaration { found }, pos);
        return Declaration::Error { pos };
    }

    let identifier = parse_identifier(parser);
    let pos = identifier.pos;

    match parser.current_kind() {
        TokenKind::Tilde => {
            parser.advance();
            let value = parse_expression(parser);
            Declaration::Const {
                identifier,
                value,
                pos,
            }
        }
        TokenKind::Colon => {
            parser.advance();
            let denoter = parse_type_denoter(parser);
            Declaration::Var {
                identifier,
                denoter,
                pos,
            }
        }
        _ => {
            let found = parser.current_token().spelling.clone();
            let error_pos = parser.current_token().position;
            parser
                .reporter
                .report(ErrorKind::ExpectedDeclaration { found }, error_pos);
            Declaration::Error { pos: error_pos }
        }
    }
}

/// `type-denoter := identifier`
pub fn parse_type_denoter(parser: &mut Parser) -> TypeDenoter {
    let token = parser.accept(TokenKind::Identifier);
    TypeDenoter::new(Identifier::new(token.spelling, token.position))
}
