pub mod ast;
pub mod compiler;
pub mod errors;
pub mod render;
pub mod semantic;
pub mod typeinfer;
