use std::cell::Cell;

use crate::Position;

use super::ast::{CharacterLiteral, Identifier, IntegerLiteral, Operator, Ty, TySlot};

/// Expression node variants.
///
/// Each carries a resolved-type slot that the type checker fills in;
/// `Error` nodes never carry a type.
#[derive(Debug, Clone)]
pub enum Expression {
    IntegerLiteral {
        literal: IntegerLiteral,
        ty: TySlot,
        pos: Position,
    },
    CharacterLiteral {
        literal: CharacterLiteral,
        ty: TySlot,
        pos: Position,
    },
    Identifier {
        identifier: Identifier,
        ty: TySlot,
        pos: Position,
    },
    Call {
        callee: Identifier,
        actual: Box<Parameter>,
        ty: TySlot,
        pos: Position,
    },
    Unary {
        operator: Operator,
        operand: Box<Expression>,
        ty: TySlot,
        pos: Position,
    },
    Binary {
        operator: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
        ty: TySlot,
        pos: Position,
    },
    Error { pos: Position },
}

impl Expression {
    pub fn pos(&self) -> Position {
        match self {
            Expression::IntegerLiteral { pos, .. }
            | Expression::CharacterLiteral { pos, .. }
            | Expression::Identifier { pos, .. }
            | Expression::Call { pos, .. }
            | Expression::Unary { pos, .. }
            | Expression::Binary { pos, .. }
            | Expression::Error { pos } => *pos,
        }
    }

    /// The resolved type, or `None` before checking, after a failed
    /// check, or for error nodes.
    pub fn ty(&self) -> Option<Ty> {
        match self {
            Expression::IntegerLiteral { ty, .. }
            | Expression::CharacterLiteral { ty, .. }
            | Expression::Identifier { ty, .. }
            | Expression::Call { ty, .. }
            | Expression::Unary { ty, .. }
            | Expression::Binary { ty, .. } => ty.get(),
            Expression::Error { .. } => None,
        }
    }

    pub fn set_ty(&self, resolved: Ty) {
        match self {
            Expression::IntegerLiteral { ty, .. }
            | Expression::CharacterLiteral { ty, .. }
            | Expression::Identifier { ty, .. }
            | Expression::Call { ty, .. }
            | Expression::Unary { ty, .. }
            | Expression::Binary { ty, .. } => ty.set(Some(resolved)),
            Expression::Error { .. } => {}
        }
    }

    pub fn new_slot() -> TySlot {
        Cell::new(None)
    }
}

/// Actual-parameter node variants.
///
/// `Blank` is the explicit empty parameter of a zero-argument call,
/// distinct from a parse error.
#[derive(Debug, Clone)]
pub enum Parameter {
    Blank { pos: Position },
    Expr {
        expression: Expression,
        ty: TySlot,
        pos: Position,
    },
    VarRef {
        identifier: Identifier,
        ty: TySlot,
        pos: Position,
    },
}

impl Parameter {
    pub fn pos(&self) -> Position {
        match self {
            Parameter::Blank { pos }
            | Parameter::Expr { pos, .. }
            | Parameter::VarRef { pos, .. } => *pos,
        }
    }

    pub fn ty(&self) -> Option<Ty> {
        match self {
            Parameter::Blank { .. } => None,
            Parameter::Expr { ty, .. } | Parameter::VarRef { ty, .. } => ty.get(),
        }
    }
}
