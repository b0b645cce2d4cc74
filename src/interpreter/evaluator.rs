/// Tree walking evaluation.
///
/// Evaluates the program root, parenthesized forms and number leaves.
pub mod core;

/// Binary operator application.
///
/// Combines an accumulator with the next operand, propagating errors and
/// checking for division by zero.
pub mod binary;
