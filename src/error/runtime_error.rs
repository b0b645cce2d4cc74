use thiserror::Error;

/// The ways evaluating a well-formed tree can fail.
///
/// A kind carries no payload. The `Display` text is the message printed after
/// the `Error: ` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// The right operand of `/` was zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The operator symbol is not one of `+`, `-`, `*`, `/`.
    #[error("Invalid operator")]
    InvalidOperator,
    /// A number literal does not fit in a 64-bit signed integer.
    #[error("Invalid number")]
    InvalidNumber,
}
