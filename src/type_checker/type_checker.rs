use crate::{
    ast::{
        ast::{Identifier, Operator, TypeDenoter},
        commands::Command,
        declarations::{Decl, DeclId, DeclKind, Declaration, Decls, Signature},
        expressions::{Expression, Parameter},
        Ty,
    },
    errors::errors::{ErrorKind, ErrorReporter},
    Position,
};

use super::environment::{standard_environment, IdentificationTable};

/// Static checker for the parsed tree.
///
/// Resolves names through the identification table, fills every type and
/// declaration slot it can, and records semantic errors without ever
/// halting. Unknown operand types (from earlier errors) suppress
/// follow-on mismatch reports so one mistake is reported once.
pub struct Checker {
    decls: Decls,
    table: IdentificationTable,
}

impl Checker {
    pub fn new() -> Self {
        let mut decls = Decls::new();
        let mut table = IdentificationTable::new();
        standard_environment(&mut decls, &mut table);
        Checker { decls, table }
    }

    /// The declaration arena, including the standard environment and
    /// everything declared by the checked program.
    pub fn decls(&self) -> &Decls {
        &self.decls
    }

    /// Checks the whole program, annotating nodes in place.
    pub fn check(&mut self, program: &Command, reporter: &mut ErrorReporter) {
        self.check_command(program, reporter);
    }

    fn check_command(&mut self, command: &Command, reporter: &mut ErrorReporter) {
        match command {
            Command::Sequential { first, second, .. } => {
                self.check_command(first, reporter);
                self.check_command(second, reporter);
            }
            Command::Assign { target, value, pos } => {
                let value_ty = self.check_expression(value, reporter);
                let Some(id) = self.resolve(target, reporter) else {
                    return;
                };
                match &self.decls.get(id).kind {
                    DeclKind::Variable { ty } => {
                        if let (Some(expected), Some(found)) = (*ty, value_ty) {
                            if expected != found {
                                reporter.report(
                                    ErrorKind::TypeMismatch {
                                        expected: expected.to_string(),
                                        found: found.to_string(),
                                    },
                                    *pos,
                                );
                            }
                        }
                    }
                    _ => reporter.report(
                        ErrorKind::NotAVariable {
                            identifier: target.spelling.clone(),
                        },
                        target.pos,
                    ),
                }
            }
            Command::Call { callee, actual, pos } => {
                match self.resolve(callee, reporter) {
                    Some(id) => match self.decls.get(id).kind.clone() {
                        DeclKind::Routine { signature } => {
                            self.check_actual(actual, Some(&signature), *pos, reporter);
                        }
                        _ => {
                            reporter.report(
                                ErrorKind::NotARoutine {
                                    identifier: callee.spelling.clone(),
                                },
                                callee.pos,
                            );
                            self.check_actual(actual, None, *pos, reporter);
                        }
                    },
                    None => {
                        self.check_actual(actual, None, *pos, reporter);
                    }
                }
            }
            Command::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                let cond_ty = self.check_expression(condition, reporter);
                self.require_boolean(cond_ty, condition.pos(), reporter);
                self.check_command(then_branch, reporter);
                self.check_command(else_branch, reporter);
            }
            Command::While {
                condition, body, ..
            } => {
                let cond_ty = self.check_expression(condition, reporter);
                self.require_boolean(cond_ty, condition.pos(), reporter);
                self.check_command(body, reporter);
            }
            Command::WhileForever { body, .. } => {
                self.check_command(body, reporter);
            }
            Command::For {
                init,
                condition,
                step,
                body,
                ..
            } => {
                self.check_command(init, reporter);
                let cond_ty = self.check_expression(condition, reporter);
                self.require_boolean(cond_ty, condition.pos(), reporter);
                self.check_command(step, reporter);
                self.check_command(body, reporter);
            }
            Command::Let {
                declaration, body, ..
            } => {
                self.table.open_scope();
                self.check_declaration(declaration, reporter);
                self.check_command(body, reporter);
                self.table.close_scope();
            }
            Command::Blank { .. } => {}
            Command::Error { pos } => {
                reporter.report_internal("error node reached the type checker".to_string(), *pos);
            }
        }
    }

    fn check_declaration(&mut self, declaration: &Declaration, reporter: &mut ErrorReporter) {
        match declaration {
            Declaration::Sequential { first, second, .. } => {
                self.check_declaration(first, reporter);
                self.check_declaration(second, reporter);
            }
            Declaration::Const {
                identifier, value, ..
            } => {
                let ty = self.check_expression(value, reporter);
                self.declare(identifier, DeclKind::Constant { ty }, reporter);
            }
            Declaration::Var {
                identifier,
                denoter,
                ..
            } => {
                let ty = self.check_type_denoter(denoter, reporter);
                self.declare(identifier, DeclKind::Variable { ty }, reporter);
            }
            Declaration::Error { pos } => {
                reporter.report_internal("error node reached the type checker".to_string(), *pos);
            }
        }
    }

    /// The denoter's identifier must resolve to a simple-type
    /// declaration, which becomes the denoter's resolved type.
    fn check_type_denoter(
        &mut self,
        denoter: &TypeDenoter,
        reporter: &mut ErrorReporter,
    ) -> Option<Ty> {
        let id = self.resolve(&denoter.identifier, reporter)?;
        match self.decls.get(id).kind {
            DeclKind::SimpleType { ty } => {
                denoter.resolved.set(Some(ty));
                Some(ty)
            }
            _ => {
                reporter.report(
                    ErrorKind::NotAType {
                        identifier: denoter.identifier.spelling.clone(),
                    },
                    denoter.pos,
                );
                None
            }
        }
    }

    fn check_expression(
        &mut self,
        expression: &Expression,
        reporter: &mut ErrorReporter,
    ) -> Option<Ty> {
        match expression {
            Expression::IntegerLiteral { literal, .. } => {
                match literal.spelling.parse::<i64>() {
                    Ok(value) if (i16::MIN as i64..=i16::MAX as i64).contains(&value) => {}
                    _ => {
                        // Out of 16-bit range; the value stays as written.
                        reporter.report(
                            ErrorKind::IntegerLiteralOutOfRange {
                                spelling: literal.spelling.clone(),
                            },
                            literal.pos,
                        );
                    }
                }
                expression.set_ty(Ty::Integer);
                Some(Ty::Integer)
            }
            Expression::CharacterLiteral { .. } => {
                expression.set_ty(Ty::Character);
                Some(Ty::Character)
            }
            Expression::Identifier { identifier, .. } => {
                let id = self.resolve(identifier, reporter)?;
                match self.decls.get(id).kind {
                    DeclKind::Constant { ty } | DeclKind::Variable { ty } => {
                        if let Some(ty) = ty {
                            expression.set_ty(ty);
                        }
                        ty
                    }
                    _ => {
                        reporter.report(
                            ErrorKind::NotAnEntity {
                                identifier: identifier.spelling.clone(),
                            },
                            identifier.pos,
                        );
                        None
                    }
                }
            }
            Expression::Unary {
                operator, operand, ..
            } => {
                let operand_ty = self.check_expression(operand, reporter);
                let signature = self.resolve_operator(operator, false, reporter)?;
                self.match_operand(&signature, 0, operand_ty, operator, operand.pos(), reporter);
                expression.set_ty(signature.result);
                Some(signature.result)
            }
            Expression::Binary {
                operator,
                left,
                right,
                ..
            } => {
                let left_ty = self.check_expression(left, reporter);
                let right_ty = self.check_expression(right, reporter);
                let signature = self.resolve_operator(operator, true, reporter)?;

                if signature.params[0].ty == Ty::Any {
                    // Polymorphic operator: the operands must match each
                    // other rather than a declared type.
                    if let (Some(l), Some(r)) = (left_ty, right_ty) {
                        if l != r {
                            reporter.report(
                                ErrorKind::OperandTypeMismatch {
                                    operator: operator.spelling.clone(),
                                    expected: l.to_string(),
                                    found: r.to_string(),
                                },
                                right.pos(),
                            );
                        }
                    }
                } else {
                    self.match_operand(&signature, 0, left_ty, operator, left.pos(), reporter);
                    self.match_operand(&signature, 1, right_ty, operator, right.pos(), reporter);
                }

                expression.set_ty(signature.result);
                Some(signature.result)
            }
            Expression::Call {
                callee, actual, pos, ..
            } => {
                let id = self.resolve(callee, reporter)?;
                match self.decls.get(id).kind.clone() {
                    DeclKind::Routine { signature } if signature.result != Ty::Void => {
                        let arity_ok = self.check_actual(actual, Some(&signature), *pos, reporter);
                        if arity_ok {
                            expression.set_ty(signature.result);
                            Some(signature.result)
                        } else {
                            // Wrong arity leaves the call's type unresolved.
                            None
                        }
                    }
                    _ => {
                        reporter.report(
                            ErrorKind::NotAFunction {
                                identifier: callee.spelling.clone(),
                            },
                            callee.pos,
                        );
                        self.check_actual(actual, None, *pos, reporter);
                        None
                    }
                }
            }
            Expression::Error { pos } => {
                reporter.report_internal("error node reached the type checker".to_string(), *pos);
                None
            }
        }
    }

    /// Matches an actual parameter against a routine signature.
    ///
    /// Children are always checked, signature or not. Returns whether the
    /// argument count matched.
    fn check_actual(
        &mut self,
        actual: &Parameter,
        signature: Option<&Signature>,
        call_pos: Position,
        reporter: &mut ErrorReporter,
    ) -> bool {
        let Some(signature) = signature else {
            self.check_parameter_children(actual, reporter);
            return false;
        };

        match signature.params.len() {
            0 => match actual {
                Parameter::Blank { .. } => true,
                _ => {
                    self.check_parameter_children(actual, reporter);
                    reporter.report(
                        ErrorKind::WrongArgumentCount {
                            expected: 0,
                            received: 1,
                        },
                        actual.pos(),
                    );
                    false
                }
            },
            1 => {
                let expected = &signature.params[0];
                match actual {
                    Parameter::Blank { pos } => {
                        reporter.report(
                            ErrorKind::WrongArgumentCount {
                                expected: 1,
                                received: 0,
                            },
                            *pos,
                        );
                        false
                    }
                    Parameter::Expr {
                        expression, ty, pos, ..
                    } => {
                        let found = self.check_expression(expression, reporter);
                        ty.set(found);
                        if expected.by_ref {
                            reporter.report(ErrorKind::VarParameterExpected, *pos);
                        } else if let Some(found) = found {
                            if found != expected.ty {
                                reporter.report(
                                    ErrorKind::TypeMismatch {
                                        expected: expected.ty.to_string(),
                                        found: found.to_string(),
                                    },
                                    *pos,
                                );
                            }
                        }
                        true
                    }
                    Parameter::VarRef {
                        identifier, ty, pos, ..
                    } => {
                        let found = self.check_var_parameter(identifier, reporter);
                        ty.set(found);
                        if !expected.by_ref {
                            reporter.report(ErrorKind::ExprParameterExpected, *pos);
                        } else if let Some(found) = found {
                            if found != expected.ty {
                                reporter.report(
                                    ErrorKind::TypeMismatch {
                                        expected: expected.ty.to_string(),
                                        found: found.to_string(),
                                    },
                                    *pos,
                                );
                            }
                        }
                        true
                    }
                }
            }
            arity => {
                // The grammar cannot produce more than one actual, so a
                // wider signature can never be satisfied.
                reporter.report_internal(
                    format!("routine signature declares {arity} parameters"),
                    call_pos,
                );
                self.check_parameter_children(actual, reporter);
                reporter.report(
                    ErrorKind::WrongArgumentCount {
                        expected: arity,
                        received: usize::from(!matches!(actual, Parameter::Blank { .. })),
                    },
                    actual.pos(),
                );
                false
            }
        }
    }

    /// Checks a parameter's children when no signature constrains them.
    fn check_parameter_children(&mut self, actual: &Parameter, reporter: &mut ErrorReporter) {
        match actual {
            Parameter::Blank { .. } => {}
            Parameter::Expr { expression, ty, .. } => {
                let found = self.check_expression(expression, reporter);
                ty.set(found);
            }
            Parameter::VarRef { identifier, ty, .. } => {
                let found = self.check_var_parameter(identifier, reporter);
                ty.set(found);
            }
        }
    }

    /// A var parameter's identifier must name a variable; its type is
    /// that variable's entity type.
    fn check_var_parameter(
        &mut self,
        identifier: &Identifier,
        reporter: &mut ErrorReporter,
    ) -> Option<Ty> {
        let id = self.resolve(identifier, reporter)?;
        match self.decls.get(id).kind {
            DeclKind::Variable { ty } => ty,
            _ => {
                reporter.report(
                    ErrorKind::NotAVariable {
                        identifier: identifier.spelling.clone(),
                    },
                    identifier.pos,
                );
                None
            }
        }
    }

    fn match_operand(
        &self,
        signature: &Signature,
        index: usize,
        found: Option<Ty>,
        operator: &Operator,
        pos: Position,
        reporter: &mut ErrorReporter,
    ) {
        let expected = signature.params[index].ty;
        if let Some(found) = found {
            if found != expected {
                reporter.report(
                    ErrorKind::OperandTypeMismatch {
                        operator: operator.spelling.clone(),
                        expected: expected.to_string(),
                        found: found.to_string(),
                    },
                    pos,
                );
            }
        }
    }

    fn require_boolean(&self, ty: Option<Ty>, pos: Position, reporter: &mut ErrorReporter) {
        if let Some(found) = ty {
            if found != Ty::Boolean {
                reporter.report(
                    ErrorKind::ConditionNotBoolean {
                        found: found.to_string(),
                    },
                    pos,
                );
            }
        }
    }

    /// Resolves an identifier to its declaration, filling its slot.
    ///
    /// Synthesized identifiers (empty spelling, produced by parser
    /// recovery) resolve to nothing without a further report — the syntax
    /// error is already on record.
    fn resolve(&mut self, identifier: &Identifier, reporter: &mut ErrorReporter) -> Option<DeclId> {
        if identifier.spelling.is_empty() {
            return None;
        }
        match self.table.retrieve(&identifier.spelling) {
            Some(id) => {
                identifier.decl.set(Some(id));
                Some(id)
            }
            None => {
                reporter.report(
                    ErrorKind::UndeclaredIdentifier {
                        identifier: identifier.spelling.clone(),
                    },
                    identifier.pos,
                );
                None
            }
        }
    }

    /// Resolves an operator to a unary or binary operator declaration.
    fn resolve_operator(
        &mut self,
        operator: &Operator,
        binary: bool,
        reporter: &mut ErrorReporter,
    ) -> Option<Signature> {
        let Some(id) = self.table.retrieve(&operator.spelling) else {
            reporter.report(
                ErrorKind::UndeclaredIdentifier {
                    identifier: operator.spelling.clone(),
                },
                operator.pos,
            );
            return None;
        };

        let signature = match (&self.decls.get(id).kind, binary) {
            (DeclKind::BinaryOperator { signature }, true) => signature.clone(),
            (DeclKind::UnaryOperator { signature }, false) => signature.clone(),
            _ => {
                reporter.report(
                    ErrorKind::NotAnOperator {
                        operator: operator.spelling.clone(),
                        arity: if binary { "binary" } else { "unary" }.to_string(),
                    },
                    operator.pos,
                );
                return None;
            }
        };

        operator.decl.set(Some(id));
        Some(signature)
    }

    /// Allocates a declaration for `identifier` and binds it at the
    /// current level, rejecting same-level duplicates.
    fn declare(&mut self, identifier: &Identifier, kind: DeclKind, reporter: &mut ErrorReporter) {
        let id = self.decls.alloc(Decl {
            name: identifier.spelling.clone(),
            kind,
            pos: identifier.pos,
        });
        identifier.decl.set(Some(id));

        if !self.table.declare(&identifier.spelling, id) {
            reporter.report(
                ErrorKind::DuplicateDeclaration {
                    identifier: identifier.spelling.clone(),
                },
                identifier.pos,
            );
        }
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}
