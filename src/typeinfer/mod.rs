mod context;
mod infer;
mod returns;

pub use context::TypeContext;
pub use infer::binop_type;
pub use returns::ReturnTypes;
