pub mod decl;
pub mod expr;
pub mod list;
pub mod stmt;
pub mod types;

pub use decl::{Declaration, DeclarationList, Field, FieldList, Param};
pub use expr::{BinOpKind, Expr, ExprKind, PrintExpressionList, Span, UnaryOpKind};
pub use list::{ListBuilder, NodeList};
pub use stmt::{ElseClause, StatementList, Stmt, StmtKind};
pub use types::DataType;
