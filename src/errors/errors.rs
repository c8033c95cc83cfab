use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A recorded diagnostic: what went wrong and where.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    position: Position,
}

impl Error {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Error { kind, position }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Which phase of the front end produced this diagnostic.
    pub fn phase(&self) -> Phase {
        match &self.kind {
            ErrorKind::UnrecognisedCharacter { .. } | ErrorKind::UnterminatedCharLiteral => {
                Phase::Lexical
            }
            ErrorKind::UnexpectedToken { .. }
            | ErrorKind::ExpectedCommand { .. }
            | ErrorKind::ExpectedDeclaration { .. }
            | ErrorKind::ExpectedExpression { .. }
            | ErrorKind::MalformedAssignOrCall { .. } => Phase::Syntax,
            ErrorKind::UndeclaredIdentifier { .. }
            | ErrorKind::TypeMismatch { .. }
            | ErrorKind::WrongArgumentCount { .. }
            | ErrorKind::NotAVariable { .. }
            | ErrorKind::NotAnEntity { .. }
            | ErrorKind::NotARoutine { .. }
            | ErrorKind::NotAFunction { .. }
            | ErrorKind::NotAType { .. }
            | ErrorKind::NotAnOperator { .. }
            | ErrorKind::VarParameterExpected { .. }
            | ErrorKind::ExprParameterExpected { .. }
            | ErrorKind::OperandTypeMismatch { .. }
            | ErrorKind::IntegerLiteralOutOfRange { .. }
            | ErrorKind::DuplicateDeclaration { .. }
            | ErrorKind::ConditionNotBoolean { .. } => Phase::Semantic,
            ErrorKind::InternalInconsistency { .. } => Phase::Internal,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

/// The front-end phase a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lexical,
    Syntax,
    Semantic,
    /// A defect in the front end itself, never caused by user input.
    Internal,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated character literal")]
    UnterminatedCharLiteral,
    #[error("expected {expected}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected a command, found {found:?}")]
    ExpectedCommand { found: String },
    #[error("expected a declaration, found {found:?}")]
    ExpectedDeclaration { found: String },
    #[error("expected an expression, found {found:?}")]
    ExpectedExpression { found: String },
    #[error("expected \":=\" or \"(\" after {identifier:?}, found {found:?}")]
    MalformedAssignOrCall { identifier: String, found: String },
    #[error("identifier {identifier:?} is not declared")]
    UndeclaredIdentifier { identifier: String },
    #[error("types do not match: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
    #[error("wrong number of arguments: expected {expected}, received {received}")]
    WrongArgumentCount { expected: usize, received: usize },
    #[error("{identifier:?} does not name a variable")]
    NotAVariable { identifier: String },
    #[error("{identifier:?} does not name a constant or variable")]
    NotAnEntity { identifier: String },
    #[error("{identifier:?} does not name a procedure or function")]
    NotARoutine { identifier: String },
    #[error("{identifier:?} does not name a function")]
    NotAFunction { identifier: String },
    #[error("{identifier:?} does not name a type")]
    NotAType { identifier: String },
    #[error("{operator:?} is not a {arity} operator")]
    NotAnOperator { operator: String, arity: String },
    #[error("parameter must be a var parameter naming a variable")]
    VarParameterExpected,
    #[error("parameter must be an expression, not a var parameter")]
    ExprParameterExpected,
    #[error("operand of {operator:?} has the wrong type: expected {expected}, found {found}")]
    OperandTypeMismatch {
        operator: String,
        expected: String,
        found: String,
    },
    #[error("integer literal {spelling:?} does not fit in 16 bits")]
    IntegerLiteralOutOfRange { spelling: String },
    #[error("identifier {identifier:?} is already declared at this level")]
    DuplicateDeclaration { identifier: String },
    #[error("condition must be Boolean, found {found}")]
    ConditionNotBoolean { found: String },
    #[error("internal inconsistency: {detail}")]
    InternalInconsistency { detail: String },
}

/// Append-only sink for diagnostics, shared by all three passes.
///
/// User-facing errors and internal-inconsistency diagnostics are kept on
/// separate lists; the latter signal a defect in the front end itself and
/// never count towards rejecting a compilation of valid input.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    errors: Vec<Error>,
    internal: Vec<Error>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        ErrorReporter {
            errors: Vec::new(),
            internal: Vec::new(),
        }
    }

    pub fn report(&mut self, kind: ErrorKind, position: Position) {
        self.errors.push(Error::new(kind, position));
    }

    /// Records a "should never happen" diagnostic without polluting the
    /// user-facing error list.
    pub fn report_internal(&mut self, detail: String, position: Position) {
        self.internal
            .push(Error::new(ErrorKind::InternalInconsistency { detail }, position));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn internal_diagnostics(&self) -> &[Error] {
        &self.internal
    }
}
