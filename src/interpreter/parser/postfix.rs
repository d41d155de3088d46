use tracing::trace;

use crate::{
    ast::{Associativity, Operator, Postfix},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Returns `true` if `top`, sitting on the operator stack, must be emitted
/// before `incoming` is pushed.
///
/// Left-associative operators pop anything of equal or higher precedence.
/// Right-associative operators only pop strictly higher precedence, so chains
/// such as `!!x` or `- -x` bind innermost first.
fn pops_before(incoming: Operator, top: Operator) -> bool {
    let incoming = incoming.spec();
    let top = top.spec();

    match incoming.associativity {
        Associativity::Left => incoming.precedence <= top.precedence,
        Associativity::Right => incoming.precedence < top.precedence,
    }
}

/// Converts an infix token sequence into postfix order.
///
/// Operands go straight to the output. Operators wait on a stack until an
/// operator that binds less tightly, a closing parenthesis or the end of input
/// releases them. Parentheses never appear in the output.
///
/// # Errors
/// - `MismatchedParentheses` if a `)` has no matching `(` or a `(` is never
///   closed.
/// - `UnexpectedToken` if `=` or `print` appears inside the expression.
///
/// # Example
/// ```
/// use calcline::interpreter::{lexer::lex, parser::postfix::to_postfix};
///
/// let postfix = to_postfix(&lex("(1 + 2) * 3").unwrap()).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
///
/// assert_eq!(rendered, ["1", "2", "+", "3", "*"]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Postfix> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Str(_) | Token::Bool(_) | Token::Identifier(_) => {
                output.push(token.clone());
            },
            Token::Operator(op) => {
                while let Some(&&Token::Operator(top)) = stack.last() {
                    if !pops_before(*op, top) {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(token);
            },
            Token::LParen => stack.push(token),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(top) => output.push(top.clone()),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
            Token::Assign | Token::Print => {
                return Err(ParseError::UnexpectedToken { token: token.to_string() });
            },
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::LParen | Token::RParen) {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(top.clone());
    }

    trace!(?output, "converted to postfix");
    Ok(output)
}
