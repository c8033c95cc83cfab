use std::collections::HashMap;

use crate::{
    ast::declarations::{Decl, DeclId, DeclKind, Decls, SigParam, Signature},
    ast::Ty,
    Position,
};

/// Scoped name-to-declaration table.
///
/// Level 0 holds the standard environment; each `let` opens a level on
/// top. Lookup walks innermost-out.
#[derive(Debug)]
pub struct IdentificationTable {
    levels: Vec<HashMap<String, DeclId>>,
}

impl IdentificationTable {
    pub fn new() -> Self {
        IdentificationTable {
            levels: vec![HashMap::new()],
        }
    }

    pub fn open_scope(&mut self) {
        self.levels.push(HashMap::new());
    }

    pub fn close_scope(&mut self) {
        // The standard-environment level never closes.
        if self.levels.len() > 1 {
            self.levels.pop();
        }
    }

    /// Binds `name` at the current level. Returns false if the name is
    /// already declared at this level; the earlier binding stays.
    pub fn declare(&mut self, name: &str, id: DeclId) -> bool {
        let level = self.levels.last_mut().unwrap();
        if level.contains_key(name) {
            return false;
        }
        level.insert(name.to_string(), id);
        true
    }

    pub fn retrieve(&self, name: &str) -> Option<DeclId> {
        self.levels
            .iter()
            .rev()
            .find_map(|level| level.get(name).copied())
    }
}

impl Default for IdentificationTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Populates the declaration arena and level-0 bindings with the
/// standard environment: the simple types, the constants true/false and
/// maxint, the operators, and the basic I/O routines.
pub fn standard_environment(decls: &mut Decls, table: &mut IdentificationTable) {
    let mut builtin = |decls: &mut Decls, table: &mut IdentificationTable, name: &str, kind| {
        let id = decls.alloc(Decl {
            name: name.to_string(),
            kind,
            pos: Position::null(),
        });
        table.declare(name, id);
    };

    builtin(decls, table, "Integer", DeclKind::SimpleType { ty: Ty::Integer });
    builtin(decls, table, "Char", DeclKind::SimpleType { ty: Ty::Character });
    builtin(decls, table, "Boolean", DeclKind::SimpleType { ty: Ty::Boolean });

    builtin(decls, table, "false", DeclKind::Constant { ty: Some(Ty::Boolean) });
    builtin(decls, table, "true", DeclKind::Constant { ty: Some(Ty::Boolean) });
    builtin(decls, table, "maxint", DeclKind::Constant { ty: Some(Ty::Integer) });

    builtin(
        decls,
        table,
        "\\",
        DeclKind::UnaryOperator {
            signature: Signature::new(vec![SigParam::by_value(Ty::Boolean)], Ty::Boolean),
        },
    );

    for arith in ["+", "-", "*", "/"] {
        builtin(
            decls,
            table,
            arith,
            DeclKind::BinaryOperator {
                signature: Signature::new(
                    vec![
                        SigParam::by_value(Ty::Integer),
                        SigParam::by_value(Ty::Integer),
                    ],
                    Ty::Integer,
                ),
            },
        );
    }

    for relation in ["<", ">"] {
        builtin(
            decls,
            table,
            relation,
            DeclKind::BinaryOperator {
                signature: Signature::new(
                    vec![
                        SigParam::by_value(Ty::Integer),
                        SigParam::by_value(Ty::Integer),
                    ],
                    Ty::Boolean,
                ),
            },
        );
    }

    // Polymorphic equality: both operands must agree with each other.
    builtin(
        decls,
        table,
        "=",
        DeclKind::BinaryOperator {
            signature: Signature::new(
                vec![SigParam::by_value(Ty::Any), SigParam::by_value(Ty::Any)],
                Ty::Boolean,
            ),
        },
    );

    builtin(
        decls,
        table,
        "put",
        DeclKind::Routine {
            signature: Signature::new(vec![SigParam::by_value(Ty::Character)], Ty::Void),
        },
    );
    builtin(
        decls,
        table,
        "get",
        DeclKind::Routine {
            signature: Signature::new(vec![SigParam::by_reference(Ty::Character)], Ty::Void),
        },
    );
    builtin(
        decls,
        table,
        "putint",
        DeclKind::Routine {
            signature: Signature::new(vec![SigParam::by_value(Ty::Integer)], Ty::Void),
        },
    );
    builtin(
        decls,
        table,
        "getint",
        DeclKind::Routine {
            signature: Signature::new(vec![SigParam::by_reference(Ty::Integer)], Ty::Void),
        },
    );
    builtin(
        decls,
        table,
        "puteol",
        DeclKind::Routine {
            signature: Signature::new(vec![], Ty::Void),
        },
    );
    builtin(
        decls,
        table,
        "chr",
        DeclKind::Routine {
            signature: Signature::new(vec![SigParam::by_value(Ty::Integer)], Ty::Character),
        },
    );
    builtin(
        decls,
        table,
        "ord",
        DeclKind::Routine {
            signature: Signature::new(vec![SigParam::by_value(Ty::Character)], Ty::Integer),
        },
    );
    builtin(
        decls,
        table,
        "eol",
        DeclKind::Routine {
            signature: Signature::new(vec![], Ty::Boolean),
        },
    );
}
