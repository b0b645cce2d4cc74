//! # lispy
//!
//! lispy is a calculator for parenthesized prefix arithmetic such as
//! `* 2 (+ 1 2)`. A line is parsed into a syntax tree, the tree is evaluated
//! to an integer or a runtime error, and the result is formatted as one line
//! of text.
//!
//! Tracing output is emitted under the `lispy` target and can be enabled with
//! `RUST_LOG=lispy=debug` (or `trace`) when running the binary.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{evaluator::core::eval_program, parser::core::parse_program, value::core::Value},
};

/// Defines the structure of parsed lines.
///
/// This module declares one node type per grammar rule: `Program` for the
/// whole line, `Expr` for an operand, and the `NumberLeaf` and `OperatorLeaf`
/// leaves. The parser builds these directly and the evaluator matches on them.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Syntax errors and runtime errors are kept apart: a syntax error is a
/// `ParseError` returned by the parser, a runtime error is an `ErrorKind`
/// carried inside a `Value`.
pub mod error;
/// Lexing, parsing, evaluation and the value type.
///
/// # Responsibilities
/// - Turns a line into tokens and tokens into a syntax tree.
/// - Walks the tree to compute a value.
/// - Defines how values are printed.
pub mod interpreter;

/// Parses a line into a syntax tree.
///
/// The entire line must match the grammar. Whitespace between tokens is
/// ignored.
///
/// # Errors
/// Returns a `ParseError` describing what was expected where the line stopped
/// matching.
///
/// # Examples
/// ```
/// assert!(lispy::parse("+ 1 (* 2 3)").is_ok());
/// assert!(lispy::parse("^ 1 2").is_err());
/// assert!(lispy::parse("+ 1 2)").is_err());
/// ```
pub fn parse(input: &str) -> Result<Program, ParseError> {
    parse_program(input)
}

/// Evaluates a parsed program.
///
/// # Examples
/// ```
/// use lispy::interpreter::value::core::Value;
///
/// let program = lispy::parse("- 10 3 2").unwrap();
/// assert_eq!(lispy::eval(&program), Value::Number(5));
/// ```
#[must_use]
pub fn eval(program: &Program) -> Value {
    eval_program(program)
}

/// Formats a value as a line of output, without the newline.
#[must_use]
pub fn format_value(value: &Value) -> String {
    value.to_string()
}

/// Parses, evaluates and formats one line.
///
/// A syntax error is returned as its message and the line is not evaluated.
/// The result never depends on earlier calls.
///
/// # Examples
/// ```
/// assert_eq!(lispy::evaluate_line("+ 1 2"), "3");
/// assert_eq!(lispy::evaluate_line("* 2 (+ 1 2)"), "6");
/// assert_eq!(lispy::evaluate_line("/ 4 0"), "Error: Division by zero");
/// ```
#[must_use]
pub fn evaluate_line(line: &str) -> String {
    match parse(line) {
        Ok(program) => format_value(&eval(&program)),
        Err(e) => {
            tracing::debug!(error = %e, "syntax error");
            e.to_string()
        },
    }
}

/// Evaluates every non-blank line of a script.
///
/// Each line is handled as by [`evaluate_line`], independently of the others,
/// and yields exactly one output line. Lines holding only whitespace are
/// skipped.
///
/// # Examples
/// ```
/// let output: Vec<String> = lispy::evaluate_script("+ 1 2\n\n/ 1 0\n").collect();
/// assert_eq!(output, ["3", "Error: Division by zero"]);
/// ```
pub fn evaluate_script(script: &str) -> impl Iterator<Item = String> {
    script.lines()
          .filter(|line| !line.trim().is_empty())
          .map(evaluate_line)
}
