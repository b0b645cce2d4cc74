use crate::{
    ast::{Application, Program},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::{
            expr::{parse_expr, parse_trailing_operands},
            utils::{column_of, parse_operator},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts.
///
/// Parsing and evaluation both recurse once per level, so this bounds the stack
/// depth of every call on a parsed tree.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a full line.
///
/// The whole line must match; there is no partial success.
///
/// Grammar: `program := operator expr+`
///
/// # Parameters
/// - `source`: The line to parse.
///
/// # Returns
/// The root `Program` node.
///
/// # Errors
/// - `InvalidCharacter` if the line contains text that starts no token.
/// - `UnexpectedToken` or `UnexpectedEndOfInput` if the tokens do not follow
///   the grammar.
/// - `NestingTooDeep` if parentheses nest deeper than [`MAX_NESTING_DEPTH`].
pub fn parse_program(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source).map_err(|span| {
                                     ParseError::InvalidCharacter { found:  source[span.clone()].to_string(),
                                                                    column: column_of(source, span.start), }
                                 })?;
    let mut iter = tokens.iter().peekable();

    let operator = parse_operator(&mut iter, source)?;
    let first = parse_expr(&mut iter, source, 0)?;
    let rest = parse_trailing_operands(&mut iter, source, 0)?;

    let program = Program { body: Application { operator,
                                                first: Box::new(first),
                                                rest,
                                                span: 0..source.len() }, };

    tracing::debug!(nodes = program.node_count(), "parsed program");

    Ok(program)
}
