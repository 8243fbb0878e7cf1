use serde::{Deserialize, Serialize};

use super::decl::FieldList;
use super::expr::{Expr, PrintExpressionList, Span};
use super::list::NodeList;
use crate::render::{Printer, Render};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stmt {
    pub kind: StmtKind,
    #[serde(default)]
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn ret(value: Option<Expr>) -> Self {
        StmtKind::Return(value).into()
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl From<StmtKind> for Stmt {
    fn from(kind: StmtKind) -> Self {
        Self::new(kind, Span::unknown())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StmtKind {
    /// Assignment to an already declared variable
    Assign { target: String, value: Expr },

    Return(Option<Expr>),

    Print(PrintExpressionList),

    /// Expression statement (calls)
    Expr(Expr),

    If {
        cond: Expr,
        fields: FieldList,
        body: StatementList,
        #[serde(default)]
        else_clause: ElseClause,
    },

    While {
        cond: Expr,
        fields: FieldList,
        body: StatementList,
    },
}

pub type StatementList = NodeList<Stmt>;

/// The else slot of an `if` statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ElseClause {
    #[default]
    Absent,
    Present {
        fields: FieldList,
        statements: StatementList,
    },
}

impl ElseClause {
    pub fn new(fields: FieldList, statements: StatementList) -> Self {
        ElseClause::Present { fields, statements }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ElseClause::Present { .. })
    }
}

/// Body of a braced block: the opening brace is already written by the owner.
/// Fields and statements go one level deeper, the closing brace at `level`.
pub(crate) fn render_block(
    printer: &Printer,
    level: usize,
    fields: &FieldList,
    statements: &StatementList,
) -> String {
    printer.params(
        "",
        level + 1,
        &[
            &fields.render(printer, level + 1),
            &statements.render(printer, level + 1),
            "\n",
            &printer.indent(level),
            "}",
        ],
    )
}

impl Render for ElseClause {
    fn render(&self, printer: &Printer, level: usize) -> String {
        match self {
            ElseClause::Absent => String::new(),
            ElseClause::Present { fields, statements } => {
                printer.params("", 0, &[" else {\n"])
                    + &render_block(printer, level, fields, statements)
            }
        }
    }
}

impl Render for Stmt {
    fn render(&self, printer: &Printer, level: usize) -> String {
        match &self.kind {
            StmtKind::Assign { target, value } => {
                format!("{} = {};", target, value.render(printer, level))
            }
            StmtKind::Return(Some(value)) => format!("return {};", value.render(printer, level)),
            StmtKind::Return(None) => "return;".to_string(),
            StmtKind::Print(list) => format!("print({});", list.render(printer, level)),
            StmtKind::Expr(expr) => format!("{};", expr.render(printer, level)),
            StmtKind::If {
                cond,
                fields,
                body,
                else_clause,
            } => {
                format!("if ({}) {{\n", cond.render(printer, level))
                    + &render_block(printer, level, fields, body)
                    + &else_clause.render(printer, level)
            }
            StmtKind::While { cond, fields, body } => {
                format!("while ({}) {{\n", cond.render(printer, level))
                    + &render_block(printer, level, fields, body)
            }
        }
    }
}

impl Render for NodeList<Stmt> {
    fn render(&self, printer: &Printer, level: usize) -> String {
        printer.line_list(self.as_slice(), level)
    }
}
