use std::{cell::Cell, fmt::Display};

use crate::Position;

use super::declarations::DeclId;

/// The closed set of built-in simple types.
///
/// The grammar cannot introduce new type declarations, so a resolved type
/// is always one of these. `Any` is the designated polymorphic
/// first-argument type of operators like equality; `Void` is the return
/// type of procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Integer,
    Character,
    Boolean,
    Any,
    Void,
}

impl Display for Ty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ty::Integer => write!(f, "Integer"),
            Ty::Character => write!(f, "Char"),
            Ty::Boolean => write!(f, "Boolean"),
            Ty::Any => write!(f, "<any>"),
            Ty::Void => write!(f, "<void>"),
        }
    }
}

/// Resolved-type slot: `None` until the type checker runs, then the
/// node's type. Construction always produces the unresolved state.
pub type TySlot = Cell<Option<Ty>>;

/// Resolved-declaration slot for identifiers and operators, filled during
/// semantic analysis.
pub type DeclSlot = Cell<Option<DeclId>>;

/// An identifier occurrence. `decl` is unset until the checker resolves
/// it, and stays unset when resolution fails.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub spelling: String,
    pub pos: Position,
    pub decl: DeclSlot,
}

impl Identifier {
    pub fn new(spelling: impl Into<String>, pos: Position) -> Self {
        Identifier {
            spelling: spelling.into(),
            pos,
            decl: Cell::new(None),
        }
    }
}

/// An operator occurrence. Operators resolve to operator declarations the
/// same way identifiers resolve to entity declarations.
#[derive(Debug, Clone)]
pub struct Operator {
    pub spelling: String,
    pub pos: Position,
    pub decl: DeclSlot,
}

impl Operator {
    pub fn new(spelling: impl Into<String>, pos: Position) -> Self {
        Operator {
            spelling: spelling.into(),
            pos,
            decl: Cell::new(None),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub spelling: String,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct CharacterLiteral {
    /// The single enclosed character.
    pub spelling: String,
    pub pos: Position,
}

/// A type denoter: an identifier that must resolve to a simple-type
/// declaration. `resolved` holds that type after checking.
#[derive(Debug, Clone)]
pub struct TypeDenoter {
    pub identifier: Identifier,
    pub resolved: TySlot,
    pub pos: Position,
}

impl TypeDenoter {
    pub fn new(identifier: Identifier) -> Self {
        let pos = identifier.pos;
        TypeDenoter {
            identifier,
            resolved: Cell::new(None),
            pos,
        }
    }
}
