use crate::{error::ErrorKind, interpreter::value::core::Value};

/// Combines two values with an operator symbol.
///
/// An error on the left wins over an error on the right, which wins over the
/// arithmetic. `+`, `-` and `*` wrap on overflow. `/` truncates toward zero and
/// fails with `DivisionByZero` when the right operand is zero; the one
/// overflowing quotient, `i64::MIN / -1`, wraps to `i64::MIN`. Any other
/// symbol gives `InvalidOperator`.
///
/// # Parameters
/// - `x`: The accumulator.
/// - `op`: The operator symbol as written.
/// - `y`: The next operand.
///
/// # Example
/// ```
/// use lispy::{
///     error::ErrorKind,
///     interpreter::{evaluator::binary::apply_op, value::core::Value},
/// };
///
/// assert_eq!(apply_op(Value::Number(7), "/", Value::Number(2)), Value::Number(3));
/// assert_eq!(apply_op(Value::Number(7), "/", Value::Number(0)),
///            Value::Error(ErrorKind::DivisionByZero));
/// assert_eq!(apply_op(Value::Number(7), "%", Value::Number(2)),
///            Value::Error(ErrorKind::InvalidOperator));
/// ```
#[must_use]
pub fn apply_op(x: Value, op: &str, y: Value) -> Value {
    let (a, b) = match (x, y) {
        (Value::Error(_), _) => return x,
        (_, Value::Error(_)) => return y,
        (Value::Number(a), Value::Number(b)) => (a, b),
    };

    let result = match op {
        "+" => Value::Number(a.wrapping_add(b)),
        "-" => Value::Number(a.wrapping_sub(b)),
        "*" => Value::Number(a.wrapping_mul(b)),
        "/" => {
            if b == 0 {
                Value::Error(ErrorKind::DivisionByZero)
            } else {
                Value::Number(a.wrapping_div(b))
            }
        },
        _ => Value::Error(ErrorKind::InvalidOperator),
    };

    if let Value::Error(kind) = result {
        tracing::trace!(%kind, a, op, b, "operator produced an error");
    }

    result
}
