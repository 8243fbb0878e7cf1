//! Text rendering of AST nodes.
//!
//! Every node renders its own syntax plus the renderings of its children.
//! The first line of a node is positioned by the caller; any continuation
//! lines are indented by the node itself, so `level` is always the depth at
//! which the node's first line begins.

/// Implemented by every node that can be printed back as target-language text.
pub trait Render {
    fn render(&self, printer: &Printer, level: usize) -> String;
}

/// Unit of indentation emitted once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    #[default]
    Tabs,
    Spaces(usize),
}

/// Shared rendering helpers, parameterised by the indentation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Printer {
    unit: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(IndentStyle::default())
    }
}

impl Printer {
    pub fn new(style: IndentStyle) -> Self {
        let unit = match style {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces(n) => " ".repeat(n),
        };
        Self { unit }
    }

    pub fn indent(&self, level: usize) -> String {
        self.unit.repeat(level)
    }

    /// One rendered item per line. Items after the first are prefixed with
    /// `level` units of indentation; the first line is left to the caller.
    pub fn line_list<T: Render>(&self, items: &[T], level: usize) -> String {
        let separator = format!("\n{}", self.indent(level));
        items
            .iter()
            .map(|item| item.render(self, level))
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Items joined with `", "` on a single line.
    pub fn comma_list<T: Render>(&self, items: &[T], level: usize) -> String {
        items
            .iter()
            .map(|item| item.render(self, level))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `prefix`, then the indentation for `level`, then every fragment in order.
    pub fn params(&self, prefix: &str, level: usize, fragments: &[&str]) -> String {
        let mut out = String::from(prefix);
        out.push_str(&self.indent(level));
        for fragment in fragments {
            out.push_str(fragment);
        }
        out
    }
}
