/// The evaluator module walks syntax trees and computes results.
///
/// # Responsibilities
/// - Converts number leaves to integers.
/// - Folds operators across their operands from left to right.
/// - Produces runtime errors as values.
pub mod evaluator;
/// The lexer module tokenizes a line for the parser.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// # Responsibilities
/// - Matches the whole line against the grammar.
/// - Resolves whether a `-` is an operator or the sign of a number.
/// - Reports syntax errors with the column they occur at.
pub mod parser;
/// The value module defines the result of evaluation.
pub mod value;
