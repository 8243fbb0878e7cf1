use serde::{Deserialize, Serialize};

use super::list::NodeList;
use crate::render::{Printer, Render};

/// Source location for error reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn unknown() -> Self {
        Self { line: 0, column: 0 }
    }

    /// The recorded line, or `None` when the node was built without a location.
    pub fn line(&self) -> Option<usize> {
        (self.line > 0).then_some(self.line)
    }
}

/// Expression with its source location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    #[serde(default)]
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn int(value: i64) -> Self {
        ExprKind::Int(value).into()
    }

    pub fn float(value: f64) -> Self {
        ExprKind::Float(value).into()
    }

    pub fn bool(value: bool) -> Self {
        ExprKind::Bool(value).into()
    }

    pub fn str(value: impl Into<String>) -> Self {
        ExprKind::Str(value.into()).into()
    }

    pub fn var(name: impl Into<String>) -> Self {
        ExprKind::Var(name.into()).into()
    }

    pub fn binop(op: BinOpKind, left: Expr, right: Expr) -> Self {
        ExprKind::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
        .into()
    }

    pub fn call(func: impl Into<String>, args: Vec<Expr>) -> Self {
        ExprKind::Call {
            func: func.into(),
            args,
        }
        .into()
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl From<ExprKind> for Expr {
    fn from(kind: ExprKind) -> Self {
        Self::new(kind, Span::unknown())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),

    /// Variable reference
    Var(String),

    BinOp {
        op: BinOpKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    UnaryOp {
        op: UnaryOpKind,
        operand: Box<Expr>,
    },

    /// Call of a named function
    Call { func: String, args: Vec<Expr> },

    /// Parenthesised expression. Operators never add parentheses of their
    /// own when printed, so grouping that differs from precedence must be
    /// spelled out with this node.
    Paren(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    And,
    Or,
}

impl std::fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Mod => "%",
            BinOpKind::Lt => "<",
            BinOpKind::LtEq => "<=",
            BinOpKind::Gt => ">",
            BinOpKind::GtEq => ">=",
            BinOpKind::Eq => "==",
            BinOpKind::NotEq => "!=",
            BinOpKind::And => "&&",
            BinOpKind::Or => "||",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOpKind {
    Neg,
    Not,
}

impl std::fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOpKind::Neg => write!(f, "-"),
            UnaryOpKind::Not => write!(f, "!"),
        }
    }
}

/// Expressions to be printed by a `print` statement.
pub type PrintExpressionList = NodeList<Expr>;

impl NodeList<Expr> {
    pub fn single(expr: Expr) -> Self {
        Self::from(vec![expr])
    }
}

impl Render for Expr {
    fn render(&self, printer: &Printer, level: usize) -> String {
        match &self.kind {
            ExprKind::Int(v) => v.to_string(),
            ExprKind::Float(v) => render_float(*v),
            ExprKind::Bool(v) => v.to_string(),
            ExprKind::Str(s) => quote(s),
            ExprKind::Var(name) => name.clone(),
            ExprKind::BinOp { op, left, right } => format!(
                "{} {} {}",
                left.render(printer, level),
                op,
                right.render(printer, level)
            ),
            ExprKind::UnaryOp { op, operand } => {
                let symbol = op.to_string();
                let text = operand.render(printer, level);
                // "--x" would lex as a decrement
                if text.starts_with(&symbol) {
                    format!("{}({})", symbol, text)
                } else {
                    format!("{}{}", symbol, text)
                }
            }
            ExprKind::Call { func, args } => {
                format!("{}({})", func, printer.comma_list(args, 0))
            }
            ExprKind::Paren(inner) => format!("({})", inner.render(printer, level)),
        }
    }
}

impl Render for NodeList<Expr> {
    fn render(&self, printer: &Printer, _level: usize) -> String {
        printer.comma_list(self.as_slice(), 0)
    }
}

fn render_float(value: f64) -> String {
    if value.is_nan() {
        "Double.NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Double.POSITIVE_INFINITY".to_string()
        } else {
            "Double.NEGATIVE_INFINITY".to_string()
        }
    } else {
        // Debug keeps the fractional part of integral values ("2.0")
        format!("{:?}", value)
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
