use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    TypeError,
    NameError,
    ReturnError,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::TypeError => write!(f, "TypeError"),
            ErrorCategory::NameError => write!(f, "NameError"),
            ErrorCategory::ReturnError => write!(f, "ReturnError"),
        }
    }
}

/// The single error kind raised by type inference and semantic checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category}: {message}")]
pub struct CompilerError {
    pub category: ErrorCategory,
    pub message: String,
    /// Source line of the offending node, when the parser recorded one.
    pub line: Option<usize>,
    pub function_name: Option<String>,
}

macro_rules! define_error_ctors {
    ($($name:ident => $category:ident),* $(,)?) => {
        $(
            pub fn $name(line: Option<usize>, msg: impl Into<String>) -> Self {
                Self::new(ErrorCategory::$category, line, msg)
            }
        )*
    }
}

impl CompilerError {
    pub fn new(category: ErrorCategory, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            line,
            function_name: None,
        }
    }

    define_error_ctors! {
        type_error   => TypeError,
        name_error   => NameError,
        return_error => ReturnError,
    }

    pub fn in_function(mut self, name: &str) -> Self {
        if self.function_name.is_none() {
            self.function_name = Some(name.to_string());
        }
        self
    }
}

pub type CompileResult<T> = std::result::Result<T, CompilerError>;

pub fn print_error(file: &Path, err: &anyhow::Error) {
    if let Some(ce) = err.chain().find_map(|e| e.downcast_ref::<CompilerError>()) {
        print_compiler_error(file, ce);
    } else {
        let message = err
            .chain()
            .last()
            .map(|e| e.to_string())
            .unwrap_or_default();
        eprintln!("error: {}", message);
        eprintln!("  --> {}", file.display());
    }
}

fn print_compiler_error(file: &Path, ce: &CompilerError) {
    eprintln!("{}: {}", ce.category, ce.message);

    eprint!("  --> {}", file.display());
    if let Some(line) = ce.line {
        eprint!(":{}", line);
    }
    if let Some(ref func) = ce.function_name {
        eprint!(", in {}", func);
    }
    eprintln!();
}
