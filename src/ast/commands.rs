use crate::Position;

use super::{
    ast::Identifier,
    declarations::Declaration,
    expressions::{Expression, Parameter},
};

/// Command node variants.
///
/// Every non-error node's position is the position of the first token
/// consumed to build it; `Error` nodes sit at the point of failure.
#[derive(Debug, Clone)]
pub enum Command {
    Sequential {
        first: Box<Command>,
        second: Box<Command>,
        pos: Position,
    },
    Assign {
        target: Identifier,
        value: Expression,
        pos: Position,
    },
    Call {
        callee: Identifier,
        actual: Parameter,
        pos: Position,
    },
    If {
        condition: Expression,
        then_branch: Box<Command>,
        else_branch: Box<Command>,
        pos: Position,
    },
    While {
        condition: Expression,
        body: Box<Command>,
        pos: Position,
    },
    WhileForever {
        body: Box<Command>,
        pos: Position,
    },
    For {
        init: Box<Command>,
        condition: Expression,
        step: Box<Command>,
        body: Box<Command>,
        pos: Position,
    },
    Let {
        declaration: Declaration,
        body: Box<Command>,
        pos: Position,
    },
    /// The explicit empty command (`nothing`), distinct from a parse error.
    Blank { pos: Position },
    Error { pos: Position },
}

impl Command {
    pub fn pos(&self) -> Position {
        match self {
            Command::Sequential { pos, .. }
            | Command::Assign { pos, .. }
            | Command::Call { pos, .. }
            | Command::If { pos, .. }
            | Command::While { pos, .. }
            | Command::WhileForever { pos, .. }
            | Command::For { pos, .. }
            | Command::Let { pos, .. }
            | Command::Blank { pos }
            | Command::Error { pos } => *pos,
        }
    }
}
