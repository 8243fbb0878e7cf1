use crate::ast::{DataType, Field};
use crate::errors::{CompileResult, CompilerError};
use std::collections::HashMap;

/// Symbol table consulted by type inference
pub struct TypeContext {
    /// Global variable name → Type
    globals: HashMap<String, DataType>,

    /// Block-local variable name → Type, innermost scope last
    scopes: Vec<HashMap<String, DataType>>,

    /// Function name → Type
    functions: HashMap<String, DataType>,
}

impl TypeContext {
    pub fn new() -> Self {
        Self {
            globals: HashMap::new(),
            scopes: Vec::new(),
            functions: HashMap::new(),
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Number of open block scopes; zero at global level.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Run `f` inside a fresh scope, popping it again whether or not `f` fails.
    pub fn with_scope<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> CompileResult<T>,
    ) -> CompileResult<T> {
        self.push_scope();
        let result = f(self);
        self.pop_scope();
        result
    }

    pub fn define_var(&mut self, name: &str, ty: DataType, line: Option<usize>) -> CompileResult<()> {
        let scope = match self.scopes.last_mut() {
            Some(scope) => scope,
            None => &mut self.globals,
        };
        if scope.contains_key(name) {
            return Err(CompilerError::name_error(
                line,
                format!("Variable '{}' already defined", name),
            ));
        }
        scope.insert(name.to_string(), ty);
        Ok(())
    }

    pub fn declare_field(&mut self, field: &Field) -> CompileResult<()> {
        self.define_var(&field.name, field.ty.clone(), field.span.line())
    }

    pub fn lookup_var(&self, name: &str, line: Option<usize>) -> CompileResult<DataType> {
        self.scopes
            .iter()
            .rev()
            .chain(std::iter::once(&self.globals))
            .find_map(|scope| scope.get(name))
            .cloned()
            .ok_or_else(|| CompilerError::name_error(line, format!("Undefined variable: {}", name)))
    }

    pub fn define_function(&mut self, name: &str, ty: DataType, line: Option<usize>) -> CompileResult<()> {
        if self.functions.contains_key(name) {
            return Err(CompilerError::name_error(
                line,
                format!("Function '{}' already defined", name),
            ));
        }
        self.functions.insert(name.to_string(), ty);
        Ok(())
    }

    pub fn lookup_function(&self, name: &str, line: Option<usize>) -> CompileResult<DataType> {
        log::debug!(
            "Looking up function '{}', have {} functions",
            name,
            self.functions.len()
        );
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| CompilerError::name_error(line, format!("Undefined function: {}", name)))
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}
