use super::*;

/// Apply `op` to two evaluated operands. Int arithmetic is checked; `/`
/// always divides as floats.
pub(super) fn binary<'a>(op: BinOp, left: Value<'a>, right: Value<'a>) -> Result<Value<'a>, RuntimeError> {
    use Value::{Bool, Float, Int};

    match (op, left, right) {
        (BinOp::Add, Int(a), Int(b)) => a.checked_add(b).map(Int).ok_or(RuntimeError::IntegerOverflow("+")),
        (BinOp::Sub, Int(a), Int(b)) => a.checked_sub(b).map(Int).ok_or(RuntimeError::IntegerOverflow("-")),
        (BinOp::Mul, Int(a), Int(b)) => a.checked_mul(b).map(Int).ok_or(RuntimeError::IntegerOverflow("*")),
        (BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div, _, _) => {
            let (a, b) = match (as_float(left), as_float(right)) {
                (Some(a), Some(b)) => (a, b),
                _ => return Err(undefined(op, left, right)),
            };
            match op {
                BinOp::Add => Ok(Float(a + b)),
                BinOp::Sub => Ok(Float(a - b)),
                BinOp::Mul => Ok(Float(a * b)),
                _ if b == 0.0 => Err(RuntimeError::DivisionByZero),
                _ => Ok(Float(a / b)),
            }
        }
        (BinOp::And, Bool(a), Bool(b)) => Ok(Bool(a && b)),
        (BinOp::Or, Bool(a), Bool(b)) => Ok(Bool(a || b)),
        _ => Err(undefined(op, left, right)),
    }
}

pub(super) fn unary<'a>(op: UnaryOp, operand: Value<'a>) -> Result<Value<'a>, RuntimeError> {
    match (op, operand) {
        (UnaryOp::Plus, Value::Int(_) | Value::Float(_)) => Ok(operand),
        (UnaryOp::Minus, Value::Int(i)) => i
            .checked_neg()
            .map(Value::Int)
            .ok_or(RuntimeError::IntegerOverflow("-")),
        (UnaryOp::Minus, Value::Float(x)) => Ok(Value::Float(-x)),
        _ => Err(RuntimeError::Internal(format!(
            "operator '{}' is not defined for {}",
            op.symbol(),
            operand.kind()
        ))),
    }
}

fn as_float(value: Value<'_>) -> Option<f64> {
    match value {
        Value::Int(i) => Some(i as f64),
        Value::Float(x) => Some(x),
        _ => None,
    }
}

fn undefined(op: BinOp, left: Value<'_>, right: Value<'_>) -> RuntimeError {
    RuntimeError::Internal(format!(
        "operator '{}' is not defined for {} and {}",
        op.symbol(),
        left.kind(),
        right.kind()
    ))
}
