use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Variable '{name}' is not defined")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator received operands it does not support.
    #[error("Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// A boolean value was expected, but not found.
    #[error("Type error: '{operator}' expects a boolean.")]
    ExpectedBoolean {
        /// Symbol of the operator that required the boolean.
        operator: &'static str,
    },
    /// A numeric value was expected, but not found.
    #[error("Type error: '{operator}' expects a number.")]
    ExpectedNumber {
        /// Symbol of the operator that required the number.
        operator: &'static str,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// String repetition would produce an unreasonably long string.
    #[error("Repeating a string of length {length} {count} times exceeds the limit of {limit} bytes.")]
    RepetitionTooLarge {
        /// Length of the repeated string in bytes.
        length: usize,
        /// Requested repeat count.
        count:  usize,
        /// Maximum allowed result length in bytes.
        limit:  usize,
    },
    /// The postfix sequence did not reduce to exactly one value.
    #[error("Invalid expression.")]
    InvalidExpression,
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. } => ErrorKind::Name,
            Self::TypeError { .. } | Self::ExpectedBoolean { .. } | Self::ExpectedNumber { .. } => {
                ErrorKind::Type
            },
            Self::DivisionByZero | Self::RepetitionTooLarge { .. } => ErrorKind::Arithmetic,
            Self::InvalidExpression => ErrorKind::Syntax,
        }
    }
}
