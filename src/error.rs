/// Syntax errors.
///
/// Raised when a line does not match the grammar. A syntax error stops the line
/// before evaluation begins and is reported as a single descriptive message.
pub mod parse_error;
/// Runtime error kinds.
///
/// The failures evaluation can produce: division by zero, an unknown operator
/// and a number literal that does not fit the integer type. These travel as
/// values through the evaluator rather than as `Err`.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::ErrorKind;
