/// Boink static types and the operator compatibility table.
///
/// The set of value kinds is closed, so operator typing is a pure function of
/// (operator, left kind, right kind). The analyzer uses it to validate
/// expressions and `Expr::ty` uses it to derive the type of an operation.
///
/// Sub-modules:
/// - `checker`: scope building, name resolution and type validation
pub mod checker;

use std::fmt;

use crate::ast::{BinOp, UnaryOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Declared with `dyn`. No operator accepts it.
    Dynamic,
    Int,
    Float,
    Bool,
    Function,
}

impl Type {
    pub fn is_numeric(self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Dynamic => "dyn",
            Type::Int => "int",
            Type::Float => "float",
            Type::Bool => "bool",
            Type::Function => "fn",
        };
        f.write_str(name)
    }
}

/// Result type of `left op right`, or `None` when the pair is incompatible.
pub fn binary_result(op: BinOp, left: Type, right: Type) -> Option<Type> {
    use Type::*;
    match op {
        BinOp::Add | BinOp::Sub | BinOp::Mul => match (left, right) {
            (Int, Int) => Some(Int),
            (Int, Float) | (Float, Int) | (Float, Float) => Some(Float),
            _ => None,
        },
        BinOp::Div => {
            if left.is_numeric() && right.is_numeric() {
                Some(Float)
            } else {
                None
            }
        }
        BinOp::And | BinOp::Or => match (left, right) {
            (Bool, Bool) => Some(Bool),
            _ => None,
        },
        BinOp::Eq | BinOp::Gt | BinOp::Gte | BinOp::Lt | BinOp::Lte => match (left, right) {
            (Int, Int) | (Float, Float) | (Bool, Bool) => Some(Bool),
            _ => None,
        },
    }
}

/// Result type of a prefix `+`/`-`: numeric operands keep their type.
pub fn unary_result(_op: UnaryOp, operand: Type) -> Option<Type> {
    if operand.is_numeric() {
        Some(operand)
    } else {
        None
    }
}
