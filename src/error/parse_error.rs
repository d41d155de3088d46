use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character that cannot start any token.
    #[error("Unexpected character '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the line.
        position:  usize,
    },
    /// A string literal was opened but never closed.
    #[error("Unterminated string literal starting at position {position}.")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        position: usize,
    },
    /// A lexeme could not be classified as any token.
    #[error("Unknown token: {token}.")]
    UnknownToken {
        /// The unclassified lexeme.
        token: String,
    },
    /// An opening or closing parenthesis has no partner.
    #[error("Mismatched parentheses.")]
    MismatchedParentheses,
    /// A statement token appeared inside an expression.
    #[error("Unexpected token '{token}' inside an expression.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
}

impl ParseError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedCharacter { .. }
            | Self::UnterminatedString { .. }
            | Self::UnknownToken { .. } => ErrorKind::Lex,
            Self::MismatchedParentheses | Self::UnexpectedToken { .. } => ErrorKind::Syntax,
        }
    }
}
