use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Columns are 1-based character offsets into the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    #[error("<stdin>:1:{column}: error: expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the grammar allows here.
        expected: &'static str,
        /// The offending token as written.
        found:    String,
        /// Where the token starts.
        column:   usize,
    },
    /// Reached the end of the line while more input was required.
    #[error("<stdin>:1:{column}: error: expected {expected}, found end of input")]
    UnexpectedEndOfInput {
        /// What the grammar allows here.
        expected: &'static str,
        /// One past the last character of the line.
        column:   usize,
    },
    /// A character that starts no token at all.
    #[error("<stdin>:1:{column}: error: unexpected character '{found}'")]
    InvalidCharacter {
        /// The unrecognized text.
        found:  String,
        /// Where the text starts.
        column: usize,
    },
    /// Parentheses nested deeper than the parser accepts.
    #[error("<stdin>:1:{column}: error: expressions nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The maximum accepted depth.
        limit:  usize,
        /// The parenthesis that crossed the limit.
        column: usize,
    },
}

impl ParseError {
    /// Returns the 1-based column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. }
            | Self::InvalidCharacter { column, .. }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }
}
