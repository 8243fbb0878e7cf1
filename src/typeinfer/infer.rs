use super::context::TypeContext;
use crate::ast::{BinOpKind, DataType, Expr, ExprKind, NodeList, UnaryOpKind};
use crate::errors::{CompileResult, CompilerError};

impl Expr {
    /// Infer the type of this expression against the symbols in `ctx`.
    pub fn infer_type(&self, ctx: &TypeContext) -> CompileResult<DataType> {
        let line = self.span.line();
        match &self.kind {
            ExprKind::Int(_) => Ok(DataType::Int),
            ExprKind::Float(_) => Ok(DataType::Float),
            ExprKind::Bool(_) => Ok(DataType::Bool),
            ExprKind::Str(_) => Ok(DataType::Str),

            ExprKind::Var(name) => ctx.lookup_var(name, line),

            ExprKind::BinOp { op, left, right } => {
                let left_ty = left.infer_type(ctx)?;
                let right_ty = right.infer_type(ctx)?;
                binop_type(*op, &left_ty, &right_ty, line)
            }

            ExprKind::UnaryOp { op, operand } => {
                let operand_ty = operand.infer_type(ctx)?;
                match op {
                    UnaryOpKind::Neg if operand_ty.is_numeric() => Ok(operand_ty),
                    UnaryOpKind::Not if operand_ty == DataType::Bool => Ok(DataType::Bool),
                    _ => Err(CompilerError::type_error(
                        line,
                        format!("bad operand type for unary {}: '{}'", op, operand_ty),
                    )),
                }
            }

            ExprKind::Call { func, args } => {
                let arg_types = args
                    .iter()
                    .map(|arg| arg.infer_type(ctx))
                    .collect::<CompileResult<Vec<_>>>()?;

                match ctx.lookup_function(func, line)? {
                    DataType::Function {
                        params,
                        return_type,
                    } => {
                        if arg_types.len() != params.len() {
                            return Err(CompilerError::type_error(
                                line,
                                format!(
                                    "Function '{}' expects {} arguments, got {}",
                                    func,
                                    params.len(),
                                    arg_types.len()
                                ),
                            ));
                        }
                        for (i, (actual, expected)) in arg_types.iter().zip(params.iter()).enumerate() {
                            if !expected.accepts(actual) {
                                return Err(CompilerError::type_error(
                                    line,
                                    format!(
                                        "Argument {} type mismatch in call to '{}': expected {}, got {}",
                                        i, func, expected, actual
                                    ),
                                ));
                            }
                        }
                        Ok(*return_type)
                    }
                    other => Err(CompilerError::type_error(
                        line,
                        format!("'{}' of type {} is not callable", func, other),
                    )),
                }
            }

            ExprKind::Paren(inner) => inner.infer_type(ctx),
        }
    }
}

impl NodeList<Expr> {
    /// Type of a print list: the list of its element types, in order.
    /// Stops at the first element that fails to type.
    pub fn infer_type(&self, ctx: &TypeContext) -> CompileResult<DataType> {
        let types = self
            .iter()
            .map(|expr| expr.infer_type(ctx))
            .collect::<CompileResult<Vec<_>>>()?;
        Ok(DataType::List(types))
    }
}

pub fn binop_type(
    op: BinOpKind,
    left: &DataType,
    right: &DataType,
    line: Option<usize>,
) -> CompileResult<DataType> {
    use DataType::*;

    let result = match op {
        BinOpKind::Add | BinOpKind::Sub | BinOpKind::Mul | BinOpKind::Div | BinOpKind::Mod => {
            match (left, right) {
                (Int, Int) => Some(Int),
                (l, r) if l.is_numeric() && r.is_numeric() => Some(Float),
                (Str, Str) if op == BinOpKind::Add => Some(Str),
                _ => None,
            }
        }
        BinOpKind::Lt | BinOpKind::LtEq | BinOpKind::Gt | BinOpKind::GtEq => {
            (left.is_numeric() && right.is_numeric()).then_some(Bool)
        }
        BinOpKind::Eq | BinOpKind::NotEq => {
            let comparable = (left == right && !left.is_void())
                || (left.is_numeric() && right.is_numeric());
            comparable.then_some(Bool)
        }
        BinOpKind::And | BinOpKind::Or => (*left == Bool && *right == Bool).then_some(Bool),
    };

    result.ok_or_else(|| {
        CompilerError::type_error(
            line,
            format!(
                "unsupported operand type(s) for {}: '{}' and '{}'",
                op, left, right
            ),
        )
    })
}
