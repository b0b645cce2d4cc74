use std::iter::Peekable;

use crate::{
    ast::{Application, Expr, NumberLeaf, Span},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{MAX_NESTING_DEPTH, ParseResult},
            utils::{
                EXPECTED_EXPR, column_of, end_of_input, parse_operator, unexpected,
            },
        },
    },
};

const EXPECTED_EXPR_OR_CLOSE: &str = "a number, '(' or ')'";

/// Parses one `expr`.
///
/// Grammar: `expr := number | '(' operator expr+ ')'`
///
/// A `-` directly followed by digits, with no whitespace between them, is the
/// sign of a negative number.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expression.
/// - `source`: The line being parsed, used for leaf text and error columns.
/// - `depth`: How many parentheses enclose this expression.
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form an expression or nest
/// deeper than [`MAX_NESTING_DEPTH`].
pub fn parse_expr<'a, I>(tokens: &mut Peekable<I>, source: &str, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Digits, span)) => Ok(Expr::Number(number_leaf(source, span.clone()))),
        Some((Token::Minus, sign)) => match tokens.peek() {
            Some((Token::Digits, digits)) if digits.start == sign.end => {
                let span = sign.start..digits.end;
                tokens.next();
                Ok(Expr::Number(number_leaf(source, span)))
            },
            _ => Err(unexpected(source, sign, EXPECTED_EXPR)),
        },
        Some((Token::LParen, open)) => parse_application(tokens, source, depth, open),
        Some((_, span)) => Err(unexpected(source, span, EXPECTED_EXPR)),
        None => Err(end_of_input(source, EXPECTED_EXPR)),
    }
}

/// Parses the inside of a parenthesized form, up to and including its `)`.
fn parse_application<'a, I>(tokens: &mut Peekable<I>,
                            source: &str,
                            depth: usize,
                            open: &Span)
                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                column: column_of(source, open.start), });
    }

    let operator = parse_operator(tokens, source)?;
    let first = parse_expr(tokens, source, depth + 1)?;
    let (rest, end) = parse_enclosed_operands(tokens, source, depth + 1)?;

    Ok(Expr::Apply(Application { operator,
                                 first: Box::new(first),
                                 rest,
                                 span: open.start..end }))
}

/// Parses operands up to and including the closing `)`.
///
/// # Returns
/// The operands and the end offset of the `)`.
///
/// # Errors
/// Returns a `ParseError` if an operand fails to parse or the line ends before
/// the closing `)`.
fn parse_enclosed_operands<'a, I>(tokens: &mut Peekable<I>,
                                  source: &str,
                                  depth: usize)
                                  -> ParseResult<(Vec<Expr>, usize)>
    where I: Iterator<Item = &'a Spanned>
{
    let mut operands = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RParen, span)) => {
                let end = span.end;
                tokens.next();
                return Ok((operands, end));
            },
            Some(_) => operands.push(parse_expr(tokens, source, depth)?),
            None => return Err(end_of_input(source, EXPECTED_EXPR_OR_CLOSE)),
        }
    }
}

/// Parses operands until the end of the line.
///
/// # Errors
/// Returns a `ParseError` if an operand fails to parse, including a stray `)`.
pub fn parse_trailing_operands<'a, I>(tokens: &mut Peekable<I>,
                                      source: &str,
                                      depth: usize)
                                      -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Spanned>
{
    let mut operands = Vec::new();

    while tokens.peek().is_some() {
        operands.push(parse_expr(tokens, source, depth)?);
    }

    Ok(operands)
}

fn number_leaf(source: &str, span: Span) -> NumberLeaf {
    NumberLeaf::new(&source[span.clone()], span)
}
