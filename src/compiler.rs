use crate::ast::DeclarationList;
use crate::render::{IndentStyle, Printer, Render};
use crate::semantic;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub indent: IndentStyle,
    /// Type-check the program before rendering it
    pub check: bool,
    pub render: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: IndentStyle::Tabs,
            check: false,
            render: true,
        }
    }
}

/// Drives the two passes over a serialised syntax tree produced by the parser.
pub struct Compiler {
    input: PathBuf,
    options: Options,
    printer: Printer,
}

impl Compiler {
    pub fn new(input_path: PathBuf, options: Options) -> Result<Self> {
        if !input_path.is_file() {
            bail!("Input file not found: {}", input_path.display());
        }

        Ok(Self {
            input: input_path,
            printer: Printer::new(options.indent),
            options,
        })
    }

    pub fn compile(&self) -> Result<String> {
        log::info!("Compiling: {}", self.input.display());
        let program = load_program(&self.input)?;
        let output = self.compile_program(&program)?;
        log::info!("Successfully compiled: {}", self.input.display());
        Ok(output)
    }

    pub fn compile_program(&self, program: &DeclarationList) -> Result<String> {
        if self.options.check {
            semantic::check_program(program)?;
            log::info!("Type check passed ({} declarations)", program.len());
        }

        if !self.options.render {
            return Ok(String::new());
        }
        Ok(program.render(&self.printer, 0))
    }
}

pub fn load_program(path: &Path) -> Result<DeclarationList> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse syntax tree in {}", path.display()))
}
