/// Boink runtime values and runtime errors.
///
/// A `Value` is one of the closed set of kinds the analyzer knows about.
/// Function values borrow their definition from the parsed program, which
/// outlives every interpreter run over it.
use std::fmt;

use thiserror::Error;

use crate::ast::FunctionDef;
use crate::types::Type;

// ---------------------------------------------------------------------------
// RuntimeError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Runtime error: variable '{0}' is used before it has a value")]
    UninitializedVariable(String),
    #[error("Runtime error: division by zero")]
    DivisionByZero,
    #[error("Runtime error: integer overflow in '{0}'")]
    IntegerOverflow(&'static str),
    #[error("Runtime error: '{0}' is not a function")]
    NotCallable(String),
    #[error("Runtime error: function '{0}' gave no value")]
    MissingValue(String),
    #[error("Runtime error: call to '{0}' nests deeper than {1} activation records")]
    CallDepthExceeded(String, usize),
    /// A state the analyzer should have ruled out.
    #[error("Internal error: {0}")]
    Internal(String),
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Int(i64),
    Float(f64),
    Bool(bool),
    Function(&'a FunctionDef),
}

impl<'a> Value<'a> {
    pub fn kind(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::Bool(_) => Type::Bool,
            Value::Function(_) => Type::Function,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Function(def) => write!(f, "<fn {}>", def.name),
        }
    }
}

/// A named, typed slot in an activation record. `value` stays `None` for a
/// declaration without initializer until something is assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable<'a> {
    pub name: String,
    pub ty: Type,
    pub value: Option<Value<'a>>,
}

impl<'a> Variable<'a> {
    pub fn new(name: impl Into<String>, ty: Type, value: Option<Value<'a>>) -> Self {
        Variable {
            name: name.into(),
            ty,
            value,
        }
    }

    pub fn get(&self) -> Result<Value<'a>, RuntimeError> {
        self.value
            .ok_or_else(|| RuntimeError::UninitializedVariable(self.name.clone()))
    }
}

impl fmt::Display for Variable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("none"),
        }
    }
}
