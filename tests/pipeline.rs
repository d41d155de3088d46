use calcline::{
    ast::{Operator, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, lex},
        parser::{postfix::to_postfix, statement::parse_statement},
        tokenizer::{RawToken, tokenize},
    },
};
use pretty_assertions::assert_eq;

fn texts(line: &str) -> Vec<String> {
    tokenize(line).unwrap().iter().map(|l| l.text.to_string()).collect()
}

fn postfix(line: &str) -> String {
    to_postfix(&lex(line).unwrap()).unwrap()
                                   .iter()
                                   .map(|t| match t {
                                       Token::Operator(Operator::Negate) => "neg".to_string(),
                                       other => other.to_string(),
                                   })
                                   .collect::<Vec<_>>()
                                   .join(" ")
}

#[test]
fn tokenizer_splits_lexemes() {
    assert_eq!(texts("x=y==z"), ["x", "=", "y", "==", "z"]);
    assert_eq!(texts("a<=b>=c!=d<e>f!g"),
               ["a", "<=", "b", ">=", "c", "!=", "d", "<", "e", ">", "f", "!", "g"]);
    assert_eq!(texts("(1+2)*3/4-5"), ["(", "1", "+", "2", ")", "*", "3", "/", "4", "-", "5"]);
    assert_eq!(texts("_tmp1 2x"), ["_tmp1", "2", "x"]);
    assert_eq!(texts("\"a b\"+c"), ["\"a b\"", "+", "c"]);
}

#[test]
fn second_decimal_point_starts_a_new_literal() {
    assert_eq!(texts("1.2.3"), ["1.2", ".3"]);
    assert_eq!(texts("7..5"), ["7.", ".5"]);
}

#[test]
fn tokenizer_categories() {
    let kinds: Vec<RawToken> = tokenize("print (x) \"s\" 1 +").unwrap()
                                                            .iter()
                                                            .map(|l| l.token)
                                                            .collect();

    assert_eq!(kinds,
               [RawToken::Word,
                RawToken::LParen,
                RawToken::Word,
                RawToken::RParen,
                RawToken::Str,
                RawToken::Number,
                RawToken::Symbol]);
}

#[test]
fn tokenizer_reports_positions() {
    assert_eq!(tokenize("1 + #").unwrap_err(),
               ParseError::UnexpectedCharacter { character: '#',
                                                 position:  4, });
    assert_eq!(tokenize("x = \"abc").unwrap_err(),
               ParseError::UnterminatedString { position: 4 });
}

#[test]
fn lexer_classifies_tokens() {
    let tokens = lex("Print x = \"hi\" and TRUE or false").unwrap();

    assert_eq!(tokens,
               [Token::Print,
                Token::Identifier("x".to_string()),
                Token::Assign,
                Token::Str("hi".to_string()),
                Token::Operator(Operator::And),
                Token::Bool(true),
                Token::Operator(Operator::Or),
                Token::Bool(false)]);
}

#[test]
fn uppercase_logical_words_are_identifiers() {
    let kinds: Vec<TokenKind> = lex("a AND b").unwrap().iter().map(Token::kind).collect();

    assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier]);
}

#[test]
fn minus_is_negation_after_operators_and_openers() {
    let negations = |line: &str| {
        lex(line).unwrap()
                 .iter()
                 .filter(|t| **t == Token::Operator(Operator::Negate))
                 .count()
    };

    assert_eq!(negations("-1"), 1);
    assert_eq!(negations("1 - 1"), 0);
    assert_eq!(negations("1 - -1"), 1);
    assert_eq!(negations("(-1)"), 1);
    assert_eq!(negations("x = -1"), 1);
    assert_eq!(negations("print -1"), 1);
    assert_eq!(negations("x - 1"), 0);
    assert_eq!(negations("(1) - 1"), 0);
    assert_eq!(negations("!-1"), 1);
}

#[test]
fn shunting_yard_orders_operators() {
    assert_eq!(postfix("1 + 2 * 3"), "1 2 3 * +");
    assert_eq!(postfix("(1 + 2) * 3"), "1 2 + 3 *");
    assert_eq!(postfix("1 - 2 - 3"), "1 2 - 3 -");
    assert_eq!(postfix("a < b and c or d"), "a b < c and d or");
    assert_eq!(postfix("!a and b"), "a ! b and");
    assert_eq!(postfix("- -a"), "a neg neg");
    assert_eq!(postfix("!!a"), "a ! !");
    assert_eq!(postfix("2 * -3"), "2 3 neg *");
    assert_eq!(postfix("-a * b"), "a neg b *");
}

#[test]
fn shunting_yard_rejects_unbalanced_parentheses() {
    assert_eq!(to_postfix(&lex("(1").unwrap()), Err(ParseError::MismatchedParentheses));
    assert_eq!(to_postfix(&lex("1)").unwrap()), Err(ParseError::MismatchedParentheses));
    assert_eq!(to_postfix(&lex("((1)").unwrap()), Err(ParseError::MismatchedParentheses));
}

#[test]
fn statements_are_classified_in_priority_order() {
    let classify = |line: &str| parse_statement(&lex(line).unwrap()).unwrap();

    assert!(matches!(classify("print 1"), Some(Statement::Print(_))));
    assert!(matches!(classify("y = 2"), Some(Statement::Assignment { .. })));
    assert!(matches!(classify("y == 2"), Some(Statement::Expression(_))));
    assert!(matches!(classify("2"), Some(Statement::Expression(_))));
    assert_eq!(classify(""), None);
}

#[test]
fn assignment_inside_an_expression_is_rejected() {
    let err = parse_statement(&lex("print x = 1").unwrap()).unwrap_err();

    assert_eq!(err, ParseError::UnexpectedToken { token: "=".to_string() });
}

#[test]
fn tokenizer_accepts_unicode_words_and_spaces() {
    assert_eq!(texts("café\u{a0}=\u{b}π2"), ["café", "=", "π2"]);

    let kinds: Vec<TokenKind> = lex("ñandú_1 = 2").unwrap().iter().map(Token::kind).collect();
    assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Assign, TokenKind::Number]);
}
