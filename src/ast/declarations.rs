use crate::Position;

use super::{
    ast::{Identifier, Ty, TypeDenoter},
    expressions::Expression,
};

/// Declaration node variants appearing in `let` commands.
#[derive(Debug, Clone)]
pub enum Declaration {
    Const {
        identifier: Identifier,
        value: Expression,
        pos: Position,
    },
    Var {
        identifier: Identifier,
        denoter: TypeDenoter,
        pos: Position,
    },
    Sequential {
        first: Box<Declaration>,
        second: Box<Declaration>,
        pos: Position,
    },
    Error { pos: Position },
}

impl Declaration {
    pub fn pos(&self) -> Position {
        match self {
            Declaration::Const { pos, .. }
            | Declaration::Var { pos, .. }
            | Declaration::Sequential { pos, .. }
            | Declaration::Error { pos } => *pos,
        }
    }
}

/// Index into the declaration arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclId(usize);

/// One formal parameter of a routine or operator signature.
#[derive(Debug, Clone, PartialEq)]
pub struct SigParam {
    pub ty: Ty,
    pub by_ref: bool,
}

impl SigParam {
    pub fn by_value(ty: Ty) -> Self {
        SigParam { ty, by_ref: false }
    }

    pub fn by_reference(ty: Ty) -> Self {
        SigParam { ty, by_ref: true }
    }
}

/// Ordered parameter list plus a result type (`Ty::Void` for procedures).
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub params: Vec<SigParam>,
    pub result: Ty,
}

impl Signature {
    pub fn new(params: Vec<SigParam>, result: Ty) -> Self {
        Signature { params, result }
    }
}

/// What a name stands for once declared.
///
/// Entity types are `None` only when the declaring construct itself was
/// in error, keeping checking best-effort without cascading.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    Constant { ty: Option<Ty> },
    Variable { ty: Option<Ty> },
    Routine { signature: Signature },
    SimpleType { ty: Ty },
    UnaryOperator { signature: Signature },
    BinaryOperator { signature: Signature },
}

/// A resolved declaration: standard-environment entries carry
/// `Position::null()`, user declarations the position of their identifier.
#[derive(Debug, Clone)]
pub struct Decl {
    pub name: String,
    pub kind: DeclKind,
    pub pos: Position,
}

/// Arena owning every declaration of one compilation run.
///
/// Identifier and operator nodes refer into it through `DeclId` slots, so
/// the annotated tree stays a tree.
#[derive(Debug, Default)]
pub struct Decls {
    entries: Vec<Decl>,
}

impl Decls {
    pub fn new() -> Self {
        Decls { entries: Vec::new() }
    }

    pub fn alloc(&mut self, decl: Decl) -> DeclId {
        self.entries.push(decl);
        DeclId(self.entries.len() - 1)
    }

    pub fn get(&self, id: DeclId) -> &Decl {
        &self.entries[id.0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
