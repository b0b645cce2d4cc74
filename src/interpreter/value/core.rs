use std::fmt;

use crate::error::ErrorKind;

/// Represents the result of evaluating any node.
///
/// Errors are ordinary values so that they flow through the same left-to-right
/// fold as numbers. There is no conversion between the two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64-bit signed integer.
    Number(i64),
    /// A runtime failure.
    Error(ErrorKind),
}

impl Value {
    /// Returns `true` if this value is a runtime error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Numbers print in plain decimal. Errors print as `Error: ` followed by the
/// message of their kind.
///
/// # Example
/// ```
/// use lispy::{error::ErrorKind, interpreter::value::core::Value};
///
/// assert_eq!(Value::Number(-42).to_string(), "-42");
/// assert_eq!(Value::Error(ErrorKind::DivisionByZero).to_string(),
///            "Error: Division by zero");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(kind) => write!(f, "Error: {kind}"),
        }
    }
}
