use logos::Logos;

use crate::ast::Span;

/// Represents a lexical token in the source input.
///
/// A minus sign is always lexed on its own. Whether it is the subtraction
/// operator or the sign of a number is decided by the parser, which knows
/// whether an operator or an operand is expected.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// An unsigned run of decimal digits, such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns `true` for the four arithmetic operator tokens.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }
}

/// A token together with the byte range it was read from.
pub type Spanned = (Token, Span);

/// Splits a line into tokens.
///
/// # Errors
/// Returns the span of the first run of input that starts no token.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, Span> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span())),
            Err(()) => return Err(lexer.span()),
        }
    }

    Ok(tokens)
}
