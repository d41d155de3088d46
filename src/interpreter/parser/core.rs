use crate::error::ParseError;

/// Result type used by the tokenizer, lexer and parser.
pub type ParseResult<T> = Result<T, ParseError>;
