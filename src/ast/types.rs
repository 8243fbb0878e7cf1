use serde::{Deserialize, Serialize};

/// Core type system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Int,
    Float,
    Bool,
    Str,

    /// Return type of procedures and of a bare `return;`
    Void,

    /// Composite "list of types", e.g. the arguments of a print statement
    List(Vec<DataType>),

    /// Function type: parameter types → return type
    Function {
        params: Vec<DataType>,
        return_type: Box<DataType>,
    },
}

impl DataType {
    pub fn is_void(&self) -> bool {
        matches!(self, DataType::Void)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int | DataType::Float)
    }

    /// Whether a value of type `other` may be stored where `self` is expected.
    pub fn accepts(&self, other: &DataType) -> bool {
        self == other || (*self == DataType::Float && *other == DataType::Int)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::Float => write!(f, "double"),
            DataType::Bool => write!(f, "boolean"),
            DataType::Str => write!(f, "String"),
            DataType::Void => write!(f, "void"),
            DataType::List(items) => {
                write!(f, "[")?;
                for (i, ty) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", ty)?;
                }
                write!(f, "]")
            }
            DataType::Function {
                params,
                return_type,
            } => {
                write!(f, "(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, ") -> {}", return_type)
            }
        }
    }
}
