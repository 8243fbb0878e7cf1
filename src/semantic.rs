//! Whole-program semantic checks.
//!
//! Registers every function signature first so calls may refer to functions
//! declared later, then checks globals in order, then every function body.
//! The first error found is returned.

use crate::ast::{
    DataType, Declaration, DeclarationList, ElseClause, Field, FieldList, Param, StatementList,
    Stmt, StmtKind,
};
use crate::errors::{CompileResult, CompilerError};
use crate::typeinfer::{ReturnTypes, TypeContext};

pub struct Checker {
    context: TypeContext,
}

impl Checker {
    pub fn new() -> Self {
        Self {
            context: TypeContext::new(),
        }
    }

    pub fn check_program(&mut self, program: &DeclarationList) -> CompileResult<()> {
        // First pass: collect function signatures
        for decl in program {
            if let Declaration::Function {
                name,
                params,
                return_type,
                span,
                ..
            } = decl
            {
                let func_type = DataType::Function {
                    params: params.iter().map(|p| p.ty.clone()).collect(),
                    return_type: Box::new(return_type.clone()),
                };
                log::debug!("Registering function '{}': {}", name, func_type);
                self.context.define_function(name, func_type, span.line())?;
            }
        }
        log::debug!(
            "First pass complete, registered {} functions",
            self.context.function_count()
        );

        // Second pass: globals, in declaration order
        for decl in program {
            if let Declaration::Field(field) = decl {
                self.check_field(field)?;
            }
        }

        // Third pass: function bodies
        for decl in program {
            if let Declaration::Function {
                name,
                params,
                return_type,
                fields,
                body,
                span,
            } = decl
            {
                self.check_function(name, params, return_type, fields, body, span.line())
                    .map_err(|e| e.in_function(name))?;
            }
        }

        Ok(())
    }

    pub fn into_context(self) -> TypeContext {
        self.context
    }

    fn check_function(
        &mut self,
        name: &str,
        params: &[Param],
        return_type: &DataType,
        fields: &FieldList,
        body: &StatementList,
        line: Option<usize>,
    ) -> CompileResult<()> {
        log::debug!("Type-checking function '{}'", name);

        self.context.with_scope(|ctx| {
            for param in params {
                if param.ty.is_void() {
                    return Err(void_variable(&param.name, line));
                }
                ctx.define_var(&param.name, param.ty.clone(), line)?;
            }
            let mut checker = BodyChecker { context: ctx };
            checker.check_block_contents(fields, body)?;

            let returns = body.return_types(checker.context)?;
            log::debug!("Function '{}' returns {}", name, returns);
            validate_returns(name, return_type, &returns, line)
        })
    }

    fn check_field(&mut self, field: &Field) -> CompileResult<()> {
        BodyChecker {
            context: &mut self.context,
        }
        .check_field(field)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

/// Statement checks against a borrowed context, used inside function scopes.
struct BodyChecker<'a> {
    context: &'a mut TypeContext,
}

impl BodyChecker<'_> {
    fn check_field(&mut self, field: &Field) -> CompileResult<()> {
        if field.ty.is_void() {
            return Err(void_variable(&field.name, field.span.line()));
        }
        if let Some(init) = &field.init {
            let init_ty = init.infer_type(self.context)?;
            if !field.ty.accepts(&init_ty) {
                return Err(CompilerError::type_error(
                    field.span.line(),
                    format!(
                        "Type mismatch in declaration of '{}': expected {}, got {}",
                        field.name, field.ty, init_ty
                    ),
                ));
            }
        }
        self.context.declare_field(field)
    }

    /// Fields and statements of a block, in the current scope.
    fn check_block_contents(&mut self, fields: &FieldList, body: &StatementList) -> CompileResult<()> {
        for field in fields {
            self.check_field(field)?;
        }
        for stmt in body {
            self.check_stmt(stmt)?;
        }
        Ok(())
    }

    fn check_nested_block(&mut self, fields: &FieldList, body: &StatementList) -> CompileResult<()> {
        self.context.with_scope(|ctx| {
            BodyChecker { context: ctx }.check_block_contents(fields, body)
        })
    }

    fn check_stmt(&mut self, stmt: &Stmt) -> CompileResult<()> {
        let line = stmt.span.line();
        match &stmt.kind {
            StmtKind::Assign { target, value } => {
                let target_ty = self.context.lookup_var(target, line)?;
                let value_ty = value.infer_type(self.context)?;
                if !target_ty.accepts(&value_ty) {
                    return Err(CompilerError::type_error(
                        line,
                        format!(
                            "Type mismatch in assignment to '{}': expected {}, got {}",
                            target, target_ty, value_ty
                        ),
                    ));
                }
            }

            StmtKind::Return(value) => {
                if let Some(value) = value {
                    value.infer_type(self.context)?;
                }
            }

            StmtKind::Print(list) => {
                list.infer_type(self.context)?;
            }

            StmtKind::Expr(expr) => {
                expr.infer_type(self.context)?;
            }

            StmtKind::If {
                cond,
                fields,
                body,
                else_clause,
            } => {
                let cond_ty = cond.infer_type(self.context)?;
                check_condition(stmt, &cond_ty, "if")?;
                self.check_nested_block(fields, body)?;
                if let ElseClause::Present { fields, statements } = else_clause {
                    self.check_nested_block(fields, statements)?;
                }
            }

            StmtKind::While { cond, fields, body } => {
                let cond_ty = cond.infer_type(self.context)?;
                check_condition(stmt, &cond_ty, "while")?;
                self.check_nested_block(fields, body)?;
            }
        }
        Ok(())
    }
}

fn void_variable(name: &str, line: Option<usize>) -> CompilerError {
    CompilerError::type_error(line, format!("Variable '{}' cannot have type void", name))
}

fn check_condition(stmt: &Stmt, cond_ty: &DataType, keyword: &str) -> CompileResult<()> {
    if *cond_ty != DataType::Bool {
        return Err(CompilerError::type_error(
            stmt.span.line(),
            format!("{} condition must be boolean, got {}", keyword, cond_ty),
        ));
    }
    Ok(())
}

/// Check a function's collected return types against its declared return type.
pub fn validate_returns(
    name: &str,
    declared: &DataType,
    returns: &ReturnTypes,
    line: Option<usize>,
) -> CompileResult<()> {
    match returns.as_slice() {
        [] if declared.is_void() => Ok(()),
        [] => Err(CompilerError::return_error(
            line,
            format!("Function '{}' must return {} but has no return", name, declared),
        )),
        [single] if declared.accepts(single) => Ok(()),
        [single] => Err(CompilerError::return_error(
            line,
            format!(
                "Return type mismatch in '{}': expected {}, got {}",
                name, declared, single
            ),
        )),
        _ => Err(CompilerError::return_error(
            line,
            format!("Function '{}' has inconsistent return types {}", name, returns),
        )),
    }
}

/// Check a whole program, returning the populated context on success.
pub fn check_program(program: &DeclarationList) -> CompileResult<TypeContext> {
    let mut checker = Checker::new();
    checker.check_program(program)?;
    Ok(checker.into_context())
}
