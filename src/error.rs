/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing, lexing and
/// converting a line to postfix form. Parse errors include unexpected
/// characters, unterminated strings and mismatched parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// expression, such as undefined variables, type mismatches or division by
/// zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// The category an error belongs to.
///
/// Front ends use this to decide how to present a failure without having to
/// match on every individual error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character or lexeme could not be turned into a token.
    Lex,
    /// The tokens do not form a well-shaped expression.
    Syntax,
    /// A variable was read before it was assigned.
    Name,
    /// An operator was applied to operands of the wrong kind.
    Type,
    /// A numeric operation has no defined result.
    Arithmetic,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex => write!(f, "LexError"),
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Name => write!(f, "NameError"),
            Self::Type => write!(f, "TypeError"),
            Self::Arithmetic => write!(f, "ArithmeticError"),
        }
    }
}

/// Any failure produced while executing a single line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpretError {
    /// The line could not be tokenized or converted to postfix form.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl InterpretError {
    /// Returns the category of the underlying error.
    ///
    /// # Example
    /// ```
    /// use calcline::{Context, error::ErrorKind};
    ///
    /// let mut context = Context::new();
    /// let err = context.execute_line("print y").unwrap_err();
    ///
    /// assert_eq!(err.kind(), ErrorKind::Name);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
