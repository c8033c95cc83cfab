/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core definitions shared by every node family (types, leaves)
/// - commands: Command node variants
/// - declarations: Declaration node variants and the declaration arena
/// - expressions: Expression and parameter node variants
pub mod ast;
pub mod commands;
pub mod declarations;
pub mod expressions;

pub use ast::{CharacterLiteral, Identifier, IntegerLiteral, Operator, Ty, TypeDenoter};
pub use commands::Command;
pub use declarations::{Decl, DeclId, DeclKind, Declaration, Decls, SigParam, Signature};
pub use expressions::{Expression, Parameter};
