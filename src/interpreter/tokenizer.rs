use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Raw lexical categories produced by the tokenizer.
///
/// The tokenizer only decides where one lexeme ends and the next begins. It
/// does not know about keywords, booleans or unary minus; that classification
/// is done by [`crate::interpreter::lexer`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = TokenizeFailure)]
#[logos(skip r"[\p{White_Space}\x1C-\x1F]+")]
pub enum RawToken {
    /// Numeric literals such as `42`, `3.14`, `2.` or `.5`.
    ///
    /// A second `.` ends the literal, so `1.2.3` is read as `1.2` then `.3`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]+")]
    Number,
    /// Identifiers and keywords, such as `x`, `print`, `TRUE` or `café`.
    ///
    /// Any Unicode letter or `_` may start a word; letters, numeric characters
    /// and `_` may continue it.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Word,
    /// Operator symbols and the assignment sign.
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("=")]
    #[token("!")]
    #[token("<")]
    #[token(">")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Symbol,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Double-quoted string literal; the lexeme includes both quotes.
    #[token("\"", lex_string)]
    Str,
}

/// Failure reported by the generated lexer before it is mapped to a
/// [`ParseError`] carrying position information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizeFailure {
    /// No rule matches the current character.
    #[default]
    UnexpectedCharacter,
    /// A `"` has no closing partner on the line.
    UnterminatedString,
}

/// A raw substring of the input together with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// Category assigned by the tokenizer.
    pub token:    RawToken,
    /// The exact source text of the lexeme.
    pub text:     &'a str,
    /// Byte offset of the lexeme in the line.
    pub position: usize,
}

/// Consumes a string literal up to and including the closing quote.
///
/// The opening quote has already been matched; the body is taken verbatim, with
/// no escape sequences.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> Result<(), TokenizeFailure> {
    match lex.remainder().find('"') {
        Some(end) => {
            lex.bump(end + 1);
            Ok(())
        },
        None => Err(TokenizeFailure::UnterminatedString),
    }
}

/// Splits one line of source text into raw lexemes.
///
/// Unicode whitespace is skipped. Two-character operators (`==`, `!=`, `<=`, `>=`)
/// always win over their one-character prefixes.
///
/// # Errors
/// - `UnexpectedCharacter` for any character that cannot start a lexeme.
/// - `UnterminatedString` when a string literal runs to the end of the line.
///
/// # Example
/// ```
/// use calcline::interpreter::tokenizer::{RawToken, tokenize};
///
/// let lexemes = tokenize("x >= .5").unwrap();
/// let texts: Vec<&str> = lexemes.iter().map(|l| l.text).collect();
///
/// assert_eq!(texts, ["x", ">=", ".5"]);
/// assert_eq!(lexemes[1].token, RawToken::Symbol);
/// ```
pub fn tokenize(line: &str) -> ParseResult<Vec<Lexeme<'_>>> {
    let mut lexemes = Vec::new();
    let mut lexer = RawToken::lexer(line);

    while let Some(result) = lexer.next() {
        let position = lexer.span().start;
        match result {
            Ok(token) => lexemes.push(Lexeme { token,
                                               text: lexer.slice(),
                                               position }),
            Err(TokenizeFailure::UnterminatedString) => {
                return Err(ParseError::UnterminatedString { position });
            },
            Err(TokenizeFailure::UnexpectedCharacter) => {
                let character = line[position..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::UnexpectedCharacter { character, position });
            },
        }
    }

    Ok(lexemes)
}
