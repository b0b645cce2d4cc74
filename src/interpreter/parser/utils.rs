use std::iter::Peekable;

use crate::{
    ast::{OperatorLeaf, Span},
    error::ParseError,
    interpreter::{lexer::Spanned, parser::core::ParseResult},
};

/// Description used when an operator is required.
pub(in crate::interpreter::parser) const EXPECTED_OPERATOR: &str = "one of '+', '-', '*', '/'";
/// Description used when an operand is required.
pub(in crate::interpreter::parser) const EXPECTED_EXPR: &str = "a number or '('";

/// Converts a byte offset into a 1-based character column.
#[must_use]
pub fn column_of(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}

/// Builds the error for a token that does not fit at this point.
pub(in crate::interpreter::parser) fn unexpected(source: &str,
                                                 span: &Span,
                                                 expected: &'static str)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected,
                                  found: source[span.clone()].to_string(),
                                  column: column_of(source, span.start) }
}

/// Builds the error for a line that ended too early.
pub(in crate::interpreter::parser) fn end_of_input(source: &str,
                                                   expected: &'static str)
                                                   -> ParseError {
    ParseError::UnexpectedEndOfInput { expected,
                                       column: column_of(source, source.len()) }
}

/// Parses an `operator` leaf.
///
/// Grammar: `operator := '+' | '-' | '*' | '/'`
///
/// A `-` here is always the operator, even when digits follow it directly.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an operator or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_operator<'a, I>(tokens: &mut Peekable<I>,
                                                            source: &str)
                                                            -> ParseResult<OperatorLeaf>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((tok, span)) if tok.is_operator() => {
            Ok(OperatorLeaf::new(&source[span.clone()], span.clone()))
        },
        Some((_, span)) => Err(unexpected(source, span, EXPECTED_OPERATOR)),
        None => Err(end_of_input(source, EXPECTED_OPERATOR)),
    }
}
