use super::context::TypeContext;
use crate::ast::{DataType, ElseClause, FieldList, NodeList, StatementList, Stmt, StmtKind};
use crate::errors::CompileResult;

/// Distinct return types in the order they were first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnTypes {
    types: Vec<DataType>,
}

impl ReturnTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `ty` unless an equal type is already present. Returns whether it was added.
    pub fn insert(&mut self, ty: DataType) -> bool {
        if self.types.contains(&ty) {
            return false;
        }
        self.types.push(ty);
        true
    }

    pub fn merge(&mut self, other: ReturnTypes) {
        for ty in other.types {
            self.insert(ty);
        }
    }

    pub fn contains(&self, ty: &DataType) -> bool {
        self.types.contains(ty)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataType> {
        self.types.iter()
    }

    pub fn as_slice(&self) -> &[DataType] {
        &self.types
    }
}

impl FromIterator<DataType> for ReturnTypes {
    fn from_iter<I: IntoIterator<Item = DataType>>(iter: I) -> Self {
        let mut set = ReturnTypes::new();
        for ty in iter {
            set.insert(ty);
        }
        set
    }
}

impl IntoIterator for ReturnTypes {
    type Item = DataType;
    type IntoIter = std::vec::IntoIter<DataType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.into_iter()
    }
}

impl std::fmt::Display for ReturnTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ty)?;
        }
        write!(f, "}}")
    }
}

/// Return types of a braced block whose fields are in scope for its statements.
fn block_return_types(
    ctx: &mut TypeContext,
    fields: &FieldList,
    statements: &StatementList,
) -> CompileResult<ReturnTypes> {
    ctx.with_scope(|ctx| {
        for field in fields {
            ctx.declare_field(field)?;
        }
        statements.return_types(ctx)
    })
}

impl Stmt {
    /// Types reachable through `return` statements in this statement, nested
    /// blocks and else clauses included. The set is not validated here.
    pub fn return_types(&self, ctx: &mut TypeContext) -> CompileResult<ReturnTypes> {
        match &self.kind {
            StmtKind::Return(Some(value)) => {
                let ty = value.infer_type(ctx)?;
                Ok(ReturnTypes::from_iter([ty]))
            }
            StmtKind::Return(None) => Ok(ReturnTypes::from_iter([DataType::Void])),
            StmtKind::If {
                fields,
                body,
                else_clause,
                ..
            } => {
                let mut types = block_return_types(ctx, fields, body)?;
                types.merge(else_clause.return_types(ctx)?);
                Ok(types)
            }
            StmtKind::While { fields, body, .. } => block_return_types(ctx, fields, body),
            StmtKind::Assign { .. } | StmtKind::Print(_) | StmtKind::Expr(_) => {
                Ok(ReturnTypes::new())
            }
        }
    }
}

impl NodeList<Stmt> {
    /// Union of the members' return types, in encounter order.
    pub fn return_types(&self, ctx: &mut TypeContext) -> CompileResult<ReturnTypes> {
        let mut types = ReturnTypes::new();
        for stmt in self {
            types.merge(stmt.return_types(ctx)?);
        }
        Ok(types)
    }
}

impl ElseClause {
    pub fn return_types(&self, ctx: &mut TypeContext) -> CompileResult<ReturnTypes> {
        match self {
            ElseClause::Absent => Ok(ReturnTypes::new()),
            ElseClause::Present { fields, statements } => {
                block_return_types(ctx, fields, statements)
            }
        }
    }
}
