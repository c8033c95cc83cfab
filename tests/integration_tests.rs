//! Integration tests for the whole front end.
//!
//! These tests drive the complete pipeline over source text — scanning,
//! parsing and type checking through one shared reporter — and assert on
//! the annotated tree and the recorded diagnostics.

use minitriangle::{
    ast::{Command, Expression},
    errors::errors::{ErrorKind, ErrorReporter, Phase},
    run_frontend, Position,
};

fn run(source: &str) -> (Command, ErrorReporter) {
    let mut reporter = ErrorReporter::new();
    let program = run_frontend(source, &mut reporter);
    (program, reporter)
}

#[test]
fn test_accepts_well_formed_program() {
    let source = "\
! sum the first n integers
let n: Integer, sum: Integer in
begin
  getint(var n),
  sum := 0,
  while 0 < n do
  begin
    sum := sum + n,
    n := n - 1
  end,
  putint(sum),
  puteol()
end";
    let (program, reporter) = run(source);

    assert!(!reporter.has_errors());
    assert!(reporter.internal_diagnostics().is_empty());
    assert!(matches!(program, Command::Let { .. }));
}

#[test]
fn test_assignment_mismatch_reported_once_at_assignment() {
    let (_, reporter) = run("let x: Integer in\nx := 'a'");

    assert_eq!(reporter.errors().len(), 1);
    let error = &reporter.errors()[0];
    assert_eq!(
        *error.get_kind(),
        ErrorKind::TypeMismatch {
            expected: "Integer".to_string(),
            found: "Char".to_string(),
        }
    );
    assert_eq!(*error.get_position(), Position::new(2, 1));
    assert_eq!(error.phase(), Phase::Semantic);
}

#[test]
fn test_wrong_arity_call_leaves_type_unresolved() {
    let (program, reporter) = run("let b: Boolean in b := eol(1)");

    assert_eq!(reporter.errors().len(), 1);
    assert!(matches!(
        reporter.errors()[0].get_kind(),
        ErrorKind::WrongArgumentCount {
            expected: 0,
            received: 1,
        }
    ));

    let Command::Let { body, .. } = program else {
        panic!("expected let command");
    };
    let Command::Assign { value, .. } = *body else {
        panic!("expected assign body");
    };
    assert!(matches!(value, Expression::Call { .. }));
    assert_eq!(value.ty(), None);
}

#[test]
fn test_unterminated_char_literal_end_to_end() {
    let (_, reporter) = run("let c ~ 'a in put(c)");

    assert!(reporter.has_errors());
    assert!(reporter
        .errors()
        .iter()
        .any(|e| matches!(e.get_kind(), ErrorKind::UnterminatedCharLiteral)));
    assert!(reporter
        .errors()
        .iter()
        .any(|e| e.phase() == Phase::Lexical));
}

#[test]
fn test_unrecognised_character_still_checks_rest() {
    let (_, reporter) = run("let x: Integer in x := 1 # 2");

    // The scanner flags `#`; the parser then stumbles on the error token.
    assert!(reporter
        .errors()
        .iter()
        .any(|e| matches!(e.get_kind(), ErrorKind::UnrecognisedCharacter { character: '#' })));
}

#[test]
fn test_syntax_recovery_still_runs_the_checker() {
    // The missing `then` is a syntax error; the undeclared `y` inside the
    // branch must still be found.
    let (_, reporter) = run("if true y := 1 else nothing");

    assert!(reporter
        .errors()
        .iter()
        .any(|e| e.phase() == Phase::Syntax));
    assert!(reporter.errors().iter().any(|e| matches!(
        e.get_kind(),
        ErrorKind::UndeclaredIdentifier { identifier } if identifier == "y"
    )));
}

#[test]
fn test_error_nodes_record_internal_diagnostics_not_errors() {
    let (program, reporter) = run("");

    // An empty program is a syntax error; the resulting error node passes
    // through the checker as an internal note only.
    assert_eq!(reporter.errors().len(), 1);
    assert!(matches!(program, Command::Error { .. }));
    assert_eq!(reporter.internal_diagnostics().len(), 1);
}

#[test]
fn test_comments_and_blank_lines_ignored() {
    let source = "\
! leading comment

let x: Integer in ! trailing comment
x := 42 ! another";
    let (_, reporter) = run(source);

    assert!(!reporter.has_errors());
}

#[test]
fn test_for_command_end_to_end() {
    let source = "\
let i: Integer in
for (i := 0, i < 10, i := i + 1) do
  putint(i)";
    let (_, reporter) = run(source);

    assert!(!reporter.has_errors());
}

#[test]
fn test_while_forever_end_to_end() {
    let (_, reporter) = run("while forever do begin get(var c) end");

    // `c` is undeclared; that is the only complaint.
    assert_eq!(reporter.errors().len(), 1);
    assert!(matches!(
        reporter.errors()[0].get_kind(),
        ErrorKind::UndeclaredIdentifier { .. }
    ));
}

#[test]
fn test_multiple_errors_all_reported() {
    let source = "\
let x: Integer in
begin
  x := 'a',
  y := 1,
  put(x)
end";
    let (_, reporter) = run(source);

    let kinds: Vec<_> = reporter.errors().iter().map(|e| e.get_kind()).collect();
    assert_eq!(kinds.len(), 3);
    assert!(matches!(kinds[0], ErrorKind::TypeMismatch { .. }));
    assert!(matches!(kinds[1], ErrorKind::UndeclaredIdentifier { .. }));
    assert!(matches!(kinds[2], ErrorKind::TypeMismatch { .. }));
}

#[test]
fn test_diagnostic_positions_survive_the_pipeline() {
    let source = "\
let x: Integer in
begin
  x := 1,
  x := 'z'
end";
    let (_, reporter) = run(source);

    assert_eq!(reporter.errors().len(), 1);
    assert_eq!(*reporter.errors()[0].get_position(), Position::new(4, 3));
}

#[test]
fn test_checking_is_idempotent_over_a_fresh_checker() {
    use minitriangle::type_checker::type_checker::Checker;

    let (program, reporter) = run("let x: Integer in begin x := 1 + 2, putint(x) end");
    assert!(!reporter.has_errors());

    let mut second_reporter = ErrorReporter::new();
    let mut second_checker = Checker::new();
    second_checker.check(&program, &mut second_reporter);

    assert!(!second_reporter.has_errors());
    assert!(second_reporter.internal_diagnostics().is_empty());
}

#[test]
fn test_standard_environment_routines_available() {
    let source = "\
let c: Char, n: Integer in
begin
  get(var c),
  n := ord(c),
  putint(n),
  put(chr(n)),
  if eol() then puteol() else nothing
end";
    let (_, reporter) = run(source);

    assert!(!reporter.has_errors());
}

#[test]
fn test_maxint_and_booleans_available() {
    let (_, reporter) = run("let x: Integer in if x < maxint = true then x := x + 1 else nothing");

    assert!(!reporter.has_errors());
}
