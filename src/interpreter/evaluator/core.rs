use crate::{
    ast::{Application, Expr, NumberLeaf, Program},
    error::ErrorKind,
    interpreter::{evaluator::binary::apply_op, value::core::Value},
};

/// Evaluates a whole program.
///
/// Evaluation is pure: the same tree always gives the same value and nothing
/// outside the tree is read or written.
#[must_use]
pub fn eval_program(program: &Program) -> Value {
    let value = eval_application(&program.body);
    tracing::debug!(%value, "evaluated program");
    value
}

/// Evaluates a single expression.
#[must_use]
pub fn eval_expr(expr: &Expr) -> Value {
    match expr {
        Expr::Number(leaf) => eval_number(leaf),
        Expr::Apply(app) => eval_application(app),
    }
}

/// Converts a number leaf to a value.
///
/// The text is read as a base-10 `i64`. A literal outside that range gives
/// `InvalidNumber`.
///
/// # Example
/// ```
/// use lispy::{
///     ast::NumberLeaf,
///     error::ErrorKind,
///     interpreter::{evaluator::core::eval_number, value::core::Value},
/// };
///
/// assert_eq!(eval_number(&NumberLeaf::new("-17", 0..3)), Value::Number(-17));
/// assert_eq!(eval_number(&NumberLeaf::new("99999999999999999999", 0..20)),
///            Value::Error(ErrorKind::InvalidNumber));
/// ```
#[must_use]
pub fn eval_number(leaf: &NumberLeaf) -> Value {
    leaf.text
        .parse::<i64>()
        .map_or(Value::Error(ErrorKind::InvalidNumber), Value::Number)
}

/// Folds the operator across the operands from left to right.
///
/// Every operand is evaluated, even after the accumulator has become an error.
fn eval_application(app: &Application) -> Value {
    let op = app.operator.symbol.as_str();

    app.rest
       .iter()
       .fold(eval_expr(&app.first), |acc, operand| apply_op(acc, op, eval_expr(operand)))
}
