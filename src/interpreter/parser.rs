/// Core parsing routines and parser configuration.
///
/// Defines the result type, the nesting limit and the entry point that parses
/// a whole line into a `Program`.
pub mod core;

/// Expression parsing.
///
/// Parses the recursive `expr` rule: a number, possibly negative, or a
/// parenthesized operator application.
pub mod expr;

/// Utility functions for the parser.
///
/// Operator parsing and the helpers that turn token positions into error
/// values.
pub mod utils;
