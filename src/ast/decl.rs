use serde::{Deserialize, Serialize};

use super::expr::{Expr, Span};
use super::list::NodeList;
use super::stmt::{render_block, StatementList};
use super::types::DataType;
use crate::render::{Printer, Render};

/// Variable declaration, optionally initialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: DataType,
    pub init: Option<Expr>,
    #[serde(default)]
    pub span: Span,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            init: None,
            span: Span::unknown(),
        }
    }

    pub fn with_init(mut self, init: Expr) -> Self {
        self.init = Some(init);
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: DataType,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    /// Global variable
    Field(Field),

    Function {
        name: String,
        params: Vec<Param>,
        return_type: DataType,
        fields: FieldList,
        body: StatementList,
        #[serde(default)]
        span: Span,
    },
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Field(field) => &field.name,
            Declaration::Function { name, .. } => name,
        }
    }
}

pub type FieldList = NodeList<Field>;
pub type DeclarationList = NodeList<Declaration>;

impl Render for Field {
    fn render(&self, printer: &Printer, level: usize) -> String {
        match &self.init {
            Some(init) => format!("{} {} = {};", self.ty, self.name, init.render(printer, level)),
            None => format!("{} {};", self.ty, self.name),
        }
    }
}

impl Render for Param {
    fn render(&self, _printer: &Printer, _level: usize) -> String {
        format!("{} {}", self.ty, self.name)
    }
}

impl Render for Declaration {
    fn render(&self, printer: &Printer, level: usize) -> String {
        match self {
            Declaration::Field(field) => field.render(printer, level),
            Declaration::Function {
                name,
                params,
                return_type,
                fields,
                body,
                ..
            } => {
                format!(
                    "{} {}({}) {{\n",
                    return_type,
                    name,
                    printer.comma_list(params, 0)
                ) + &render_block(printer, level, fields, body)
            }
        }
    }
}

impl Render for NodeList<Field> {
    fn render(&self, printer: &Printer, level: usize) -> String {
        if self.is_empty() {
            return String::new();
        }
        printer.params(
            "",
            0,
            &[
                &printer.line_list(self.as_slice(), level),
                "\n",
                &printer.indent(level),
            ],
        )
    }
}

impl Render for NodeList<Declaration> {
    fn render(&self, printer: &Printer, level: usize) -> String {
        if self.is_empty() {
            return String::new();
        }
        printer.params("", level, &[&printer.line_list(self.as_slice(), level)])
    }
}
