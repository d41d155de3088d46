use tracing::trace;

use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        tokenizer::{Lexeme, RawToken, tokenize},
    },
};

/// Represents a classified token in the source input.
///
/// Each variant carries the payload that matches its kind, so a number token
/// always holds an `f64`, a string token a `String`, and so on.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14` or `.5`.
    Number(f64),
    /// String literal tokens, without the surrounding quotes.
    Str(String),
    /// Boolean literal tokens, `true` or `false` in any letter case.
    Bool(bool),
    /// Variable names such as `x` or `total_2`.
    Identifier(String),
    /// Any operator, including the prefix forms `!` and negation.
    Operator(Operator),
    /// `=`
    Assign,
    /// `print`, in any letter case.
    Print,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// The kind of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// [`Token::Number`]
    Number,
    /// [`Token::Str`]
    Str,
    /// [`Token::Bool`]
    Bool,
    /// [`Token::Identifier`]
    Identifier,
    /// [`Token::Operator`]
    Operator,
    /// [`Token::Assign`]
    Assign,
    /// [`Token::Print`]
    Print,
    /// [`Token::LParen`]
    LParen,
    /// [`Token::RParen`]
    RParen,
}

impl Token {
    /// Returns the payload-free kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Str(_) => TokenKind::Str,
            Self::Bool(_) => TokenKind::Bool,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Operator(_) => TokenKind::Operator,
            Self::Assign => TokenKind::Assign,
            Self::Print => TokenKind::Print,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Assign => write!(f, "="),
            Self::Print => write!(f, "print"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Returns `true` when a `-` following `previous` starts an operand instead of
/// subtracting from one.
const fn starts_operand(previous: Option<&Token>) -> bool {
    matches!(previous,
             None | Some(Token::Operator(_) | Token::LParen | Token::Assign | Token::Print))
}

/// Classifies an identifier-shaped lexeme.
///
/// Keywords only ever consist of ASCII letters, so an ASCII case-insensitive
/// comparison is enough even though words may contain any Unicode letter.
fn classify_word(word: &str) -> Token {
    if word.eq_ignore_ascii_case("print") {
        Token::Print
    } else if word.eq_ignore_ascii_case("true") {
        Token::Bool(true)
    } else if word.eq_ignore_ascii_case("false") {
        Token::Bool(false)
    } else if let Some(op) = Operator::from_symbol(word) {
        Token::Operator(op)
    } else {
        Token::Identifier(word.to_string())
    }
}

/// Classifies a single lexeme, looking back at the previously emitted token to
/// tell negation from subtraction.
fn classify(lexeme: &Lexeme<'_>, previous: Option<&Token>) -> ParseResult<Token> {
    let unknown = || ParseError::UnknownToken { token: lexeme.text.to_string() };

    match lexeme.token {
        RawToken::Str => {
            let body = lexeme.text
                             .strip_prefix('"')
                             .and_then(|s| s.strip_suffix('"'))
                             .ok_or_else(unknown)?;
            Ok(Token::Str(body.to_string()))
        },
        RawToken::Number => lexeme.text.parse().map(Token::Number).map_err(|_| unknown()),
        RawToken::Word => Ok(classify_word(lexeme.text)),
        RawToken::Symbol => match lexeme.text {
            "=" => Ok(Token::Assign),
            "-" if starts_operand(previous) => Ok(Token::Operator(Operator::Negate)),
            symbol => Operator::from_symbol(symbol).map(Token::Operator).ok_or_else(unknown),
        },
        RawToken::LParen => Ok(Token::LParen),
        RawToken::RParen => Ok(Token::RParen),
    }
}

/// Tokenizes and classifies one line of source text.
///
/// Keywords `print`, `true` and `false` are recognised in any letter case,
/// while `and` and `or` must be lowercase. A `-` becomes negation when it is
/// the first token or follows an operator, `(`, `=` or `print`.
///
/// # Errors
/// Returns any tokenizer error, or `UnknownToken` if a lexeme cannot be
/// classified.
///
/// # Example
/// ```
/// use calcline::{
///     ast::Operator,
///     interpreter::lexer::{Token, lex},
/// };
///
/// let tokens = lex("2 * -3").unwrap();
///
/// assert_eq!(tokens,
///            [Token::Number(2.0),
///             Token::Operator(Operator::Mul),
///             Token::Operator(Operator::Negate),
///             Token::Number(3.0)]);
/// ```
pub fn lex(line: &str) -> ParseResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();

    for lexeme in tokenize(line)? {
        let token = classify(&lexeme, tokens.last())?;
        tokens.push(token);
    }

    trace!(?tokens, "lexed line");
    Ok(tokens)
}
