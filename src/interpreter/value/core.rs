use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value that can appear on the evaluation stack, be
/// stored in a variable or be returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by literals, comparisons and the logical operators.
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Builds the value a literal token stands for.
    ///
    /// Returns `None` for identifiers, operators and punctuation.
    #[must_use]
    pub fn from_literal(token: &Token) -> Option<Self> {
        match token {
            Token::Number(n) => Some(Self::Number(*n)),
            Token::Str(s) => Some(Self::Str(s.clone())),
            Token::Bool(b) => Some(Self::Bool(*b)),
            _ => None,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `op`: The operator requesting the number, used in the error message.
    ///
    /// # Example
    /// ```
    /// use calcline::{ast::Operator, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Number(2.5).as_number(Operator::Sub).unwrap(), 2.5);
    /// assert!(Value::Bool(true).as_number(Operator::Sub).is_err());
    /// ```
    pub const fn as_number(&self, op: Operator) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { operator: op.symbol() }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// # Parameters
    /// - `op`: The operator requesting the boolean, used in the error message.
    pub const fn as_bool(&self, op: Operator) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { operator: op.symbol() }),
        }
    }

    /// Human readable name of the value's kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
