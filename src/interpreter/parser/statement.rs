use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, postfix::to_postfix},
    },
};

/// Classifies a lexed line and converts its expression to postfix form.
///
/// The line is matched in this order:
/// 1. `print <expr>`: a print statement.
/// 2. `<identifier> = <expr>` with a non-empty right-hand side: an assignment.
/// 3. Anything else: a bare expression.
///
/// A blank line yields `Ok(None)`.
///
/// # Errors
/// Propagates any error raised by [`to_postfix`].
///
/// # Example
/// ```
/// use calcline::{
///     ast::Statement,
///     interpreter::{lexer::lex, parser::statement::parse_statement},
/// };
///
/// let statement = parse_statement(&lex("x = 1 + 2").unwrap()).unwrap();
///
/// assert!(matches!(statement, Some(Statement::Assignment { ref name, .. }) if name == "x"));
/// assert_eq!(parse_statement(&[]).unwrap(), None);
/// ```
pub fn parse_statement(tokens: &[Token]) -> ParseResult<Option<Statement>> {
    let statement = match tokens {
        [] => return Ok(None),
        [Token::Print, expr @ ..] => Statement::Print(to_postfix(expr)?),
        [Token::Identifier(name), Token::Assign, expr @ ..] if !expr.is_empty() => {
            Statement::Assignment { name: name.clone(),
                                    expr: to_postfix(expr)?, }
        },
        expr => Statement::Expression(to_postfix(expr)?),
    };

    Ok(Some(statement))
}
