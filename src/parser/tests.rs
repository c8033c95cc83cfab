//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Assignments, calls and sequential commands
//! - Control flow (if, while, while forever, for)
//! - Declarations and let commands
//! - Expressions and parameters
//! - Error recovery

use crate::ast::commands::Command;
use crate::ast::declarations::Declaration;
use crate::ast::expressions::{Expression, Parameter};
use crate::errors::errors::ErrorReporter;
use crate::lexer::{lexer::scan, source::StringSource};
use crate::Position;

use super::parser::parse;

fn parse_source(source: &str) -> (Command, ErrorReporter) {
    let mut reporter = ErrorReporter::new();
    let tokens = scan(StringSource::new(source), &mut reporter);
    let program = parse(tokens, &mut reporter);
    (program, reporter)
}

#[test]
fn test_parse_assignment() {
    let (program, reporter) = parse_source("x := 1");

    assert!(!reporter.has_errors());
    match program {
        Command::Assign { target, value, .. } => {
            assert_eq!(target.spelling, "x");
            assert!(matches!(value, Expression::IntegerLiteral { .. }));
        }
        other => panic!("expected assign command, got {:?}", other),
    }
}

#[test]
fn test_parse_sequential_command() {
    let (program, reporter) = parse_source("x := 1, y := 2");

    assert!(!reporter.has_errors());
    match program {
        Command::Sequential { first, second, .. } => {
            match *first {
                Command::Assign { ref target, .. } => assert_eq!(target.spelling, "x"),
                ref other => panic!("expected assign, got {:?}", other),
            }
            match *second {
                Command::Assign { ref target, .. } => assert_eq!(target.spelling, "y"),
                ref other => panic!("expected assign, got {:?}", other),
            }
        }
        other => panic!("expected sequential command, got {:?}", other),
    }
}

#[test]
fn test_parse_call_command() {
    let (program, reporter) = parse_source("puteol()");

    assert!(!reporter.has_errors());
    match program {
        Command::Call { callee, actual, .. } => {
            assert_eq!(callee.spelling, "puteol");
            assert!(matches!(actual, Parameter::Blank { .. }));
        }
        other => panic!("expected call command, got {:?}", other),
    }
}

#[test]
fn test_parse_call_with_var_parameter() {
    let (program, reporter) = parse_source("getint(var n)");

    assert!(!reporter.has_errors());
    match program {
        Command::Call { actual, .. } => match actual {
            Parameter::VarRef { identifier, .. } => assert_eq!(identifier.spelling, "n"),
            other => panic!("expected var parameter, got {:?}", other),
        },
        other => panic!("expected call command, got {:?}", other),
    }
}

#[test]
fn test_parse_if_command() {
    let (program, reporter) = parse_source("if x then y := 1 else z := 2");

    assert!(!reporter.has_errors());
    match program {
        Command::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            assert!(matches!(condition, Expression::Identifier { .. }));
            assert!(matches!(*then_branch, Command::Assign { .. }));
            assert!(matches!(*else_branch, Command::Assign { .. }));
        }
        other => panic!("expected if command, got {:?}", other),
    }
}

#[test]
fn test_parse_while_command() {
    let (program, reporter) = parse_source("while x do x := x - 1");

    assert!(!reporter.has_errors());
    assert!(matches!(program, Command::While { .. }));
}

#[test]
fn test_parse_while_forever_command() {
    let (program, reporter) = parse_source("while forever do nothing");

    assert!(!reporter.has_errors());
    match program {
        Command::WhileForever { body, .. } => {
            assert!(matches!(*body, Command::Blank { .. }));
        }
        other => panic!("expected while-forever command, got {:?}", other),
    }
}

#[test]
fn test_parse_for_command() {
    let (program, reporter) = parse_source("for (i := 0, i < 9, i := i + 1) do putint(i)");

    assert!(!reporter.has_errors());
    match program {
        Command::For {
            init,
            condition,
            step,
            body,
            ..
        } => {
            assert!(matches!(*init, Command::Assign { .. }));
            assert!(matches!(condition, Expression::Binary { .. }));
            assert!(matches!(*step, Command::Assign { .. }));
            assert!(matches!(*body, Command::Call { .. }));
        }
        other => panic!("expected for command, got {:?}", other),
    }
}

#[test]
fn test_parse_let_command() {
    let (program, reporter) = parse_source("let x: Integer in x := 0");

    assert!(!reporter.has_errors());
    match program {
        Command::Let {
            declaration, body, ..
        } => {
            match declaration {
                Declaration::Var {
                    identifier,
                    denoter,
                    ..
                } => {
                    assert_eq!(identifier.spelling, "x");
                    assert_eq!(denoter.identifier.spelling, "Integer");
                }
                other => panic!("expected var declaration, got {:?}", other),
            }
            assert!(matches!(*body, Command::Assign { .. }));
        }
        other => panic!("expected let command, got {:?}", other),
    }
}

#[test]
fn test_parse_const_declaration() {
    let (program, reporter) = parse_source("let n ~ 7 in putint(n)");

    assert!(!reporter.has_errors());
    match program {
        Command::Let { declaration, .. } => match declaration {
            Declaration::Const {
                identifier, value, ..
            } => {
                assert_eq!(identifier.spelling, "n");
                assert!(matches!(value, Expression::IntegerLiteral { .. }));
            }
            other => panic!("expected const declaration, got {:?}", other),
        },
        other => panic!("expected let command, got {:?}", other),
    }
}

#[test]
fn test_parse_sequential_declaration() {
    let (program, reporter) = parse_source("let x: Integer, y: Char in nothing");

    assert!(!reporter.has_errors());
    match program {
        Command::Let { declaration, .. } => {
            assert!(matches!(declaration, Declaration::Sequential { .. }));
        }
        other => panic!("expected let command, got {:?}", other),
    }
}

#[test]
fn test_parse_begin_end_returns_inner_command() {
    let (program, reporter) = parse_source("begin x := 1, y := 2 end");

    assert!(!reporter.has_errors());
    // No wrapper node: the bracketed command comes back directly.
    assert!(matches!(program, Command::Sequential { .. }));
}

#[test]
fn test_parse_binary_expression_left_associative() {
    let (program, reporter) = parse_source("x := 1 + 2 * 3");

    assert!(!reporter.has_errors());
    // Flat single precedence: ((1 + 2) * 3)
    match program {
        Command::Assign { value, .. } => match value {
            Expression::Binary {
                operator,
                left,
                right,
                ..
            } => {
                assert_eq!(operator.spelling, "*");
                assert!(matches!(*left, Expression::Binary { .. }));
                assert!(matches!(*right, Expression::IntegerLiteral { .. }));
            }
            other => panic!("expected binary expression, got {:?}", other),
        },
        other => panic!("expected assign command, got {:?}", other),
    }
}

#[test]
fn test_parse_unary_expression() {
    let (program, reporter) = parse_source("b := \\a");

    assert!(!reporter.has_errors());
    match program {
        Command::Assign { value, .. } => match value {
            Expression::Unary {
                operator, operand, ..
            } => {
                assert_eq!(operator.spelling, "\\");
                assert!(matches!(*operand, Expression::Identifier { .. }));
            }
            other => panic!("expected unary expression, got {:?}", other),
        },
        other => panic!("expected assign command, got {:?}", other),
    }
}

#[test]
fn test_parse_parenthesized_expression_unwrapped() {
    let (program, reporter) = parse_source("x := (y)");

    assert!(!reporter.has_errors());
    match program {
        Command::Assign { value, .. } => {
            assert!(matches!(value, Expression::Identifier { .. }));
        }
        other => panic!("expected assign command, got {:?}", other),
    }
}

#[test]
fn test_parse_call_expression() {
    let (program, reporter) = parse_source("x := ord('a')");

    assert!(!reporter.has_errors());
    match program {
        Command::Assign { value, .. } => match value {
            Expression::Call { callee, actual, .. } => {
                assert_eq!(callee.spelling, "ord");
                assert!(matches!(*actual, Parameter::Expr { .. }));
            }
            other => panic!("expected call expression, got {:?}", other),
        },
        other => panic!("expected assign command, got {:?}", other),
    }
}

#[test]
fn test_node_positions_match_first_token() {
    let (program, _) = parse_source("if x\nthen y := 1 else nothing");

    match program {
        Command::If {
            condition,
            then_branch,
            ..
        } => {
            assert_eq!(condition.pos(), Position::new(1, 4));
            assert_eq!(then_branch.pos(), Position::new(2, 6));
        }
        other => panic!("expected if command, got {:?}", other),
    }
    // The if node itself sits at its first token.
    let (program, _) = parse_source("if x\nthen y := 1 else nothing");
    assert_eq!(program.pos(), Position::new(1, 1));
}

#[test]
fn test_parse_unexpected_token_reports_and_recovers() {
    let (program, reporter) = parse_source("if x y := 1 else z := 2");

    // The missing `then` is recorded; parsing proceeds as if it were there.
    assert!(reporter.has_errors());
    assert!(matches!(program, Command::If { .. }));
}

#[test]
fn test_parse_garbage_produces_error_node() {
    let (program, reporter) = parse_source("else");

    assert!(reporter.has_errors());
    assert!(matches!(program, Command::Error { .. }));
}

#[test]
fn test_parse_malformed_assignment_or_call() {
    let (program, reporter) = parse_source("x + 1");

    assert!(reporter.has_errors());
    assert!(matches!(program, Command::Error { .. }));
}

#[test]
fn test_parse_cascading_errors_are_non_fatal() {
    // Recovery without consuming the unexpected token may cascade; the
    // parse must still terminate and produce a tree.
    let (_, reporter) = parse_source("let : in x := ,");

    assert!(reporter.has_errors());
    assert!(reporter.errors().len() >= 2);
}

#[test]
fn test_parse_empty_input_reports_missing_command() {
    let (program, reporter) = parse_source("");

    assert!(reporter.has_errors());
    assert!(matches!(program, Command::Error { .. }));
}
