use calcline::{Context, ErrorKind, InterpretError, error::ParseError, error::RuntimeError};
use pretty_assertions::assert_eq;

fn failure(src: &str) -> InterpretError {
    let mut context = Context::new();
    match context.execute_line(src) {
        Ok(result) => panic!("Line {src:?} succeeded with {result:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    assert_eq!(failure(src).kind(), kind, "kind of error for {src:?}");
}

#[test]
fn undefined_variable_is_a_name_error() {
    let err = failure("print y");

    assert_eq!(err.kind(), ErrorKind::Name);
    assert_eq!(err.to_string(), "Variable 'y' is not defined");
}

#[test]
fn mismatched_parentheses_are_syntax_errors() {
    assert_eq!(failure("print (1 + 2"),
               InterpretError::Parse(ParseError::MismatchedParentheses));
    assert_eq!(failure("print 1 + 2)"),
               InterpretError::Parse(ParseError::MismatchedParentheses));
    assert_kind(")(", ErrorKind::Syntax);
}

#[test]
fn malformed_expressions_are_syntax_errors() {
    assert_kind("print", ErrorKind::Syntax);
    assert_kind("print 1 2", ErrorKind::Syntax);
    assert_kind("print 1 +", ErrorKind::Syntax);
    assert_kind("print * 2", ErrorKind::Syntax);
    assert_kind("print ()", ErrorKind::Syntax);
    assert_kind("print 1.2.3", ErrorKind::Syntax);
    assert_kind("x =", ErrorKind::Syntax);
    assert_kind("x = y = 3", ErrorKind::Syntax);
    assert_kind("1 + print 2", ErrorKind::Syntax);
}

#[test]
fn lexical_errors() {
    assert_eq!(failure("print 1 $ 2"),
               InterpretError::Parse(ParseError::UnexpectedCharacter { character: '$',
                                                                       position:  8, }));
    assert_eq!(failure("print \"open"),
               InterpretError::Parse(ParseError::UnterminatedString { position: 6 }));
    assert_kind("print 1..", ErrorKind::Lex);
    assert_kind("a & b", ErrorKind::Lex);
}

#[test]
fn operators_reject_unsupported_operands() {
    assert_kind("print !1", ErrorKind::Type);
    assert_kind("print -true", ErrorKind::Type);
    assert_kind("print -\"a\"", ErrorKind::Type);
    assert_kind("print 1 and true", ErrorKind::Type);
    assert_kind("print true or \"no\"", ErrorKind::Type);
    assert_kind("print \"a\" - 1", ErrorKind::Type);
    assert_kind("print 4 / false", ErrorKind::Type);
    assert_kind("print \"a\" * \"b\"", ErrorKind::Type);
    assert_kind("print true * 2", ErrorKind::Type);
    assert_kind("print 1 < \"2\"", ErrorKind::Type);
    assert_kind("print true >= 0", ErrorKind::Type);
}

#[test]
fn logical_operators_do_not_short_circuit() {
    assert_kind("print false and missing", ErrorKind::Name);
    assert_kind("print true or 1", ErrorKind::Type);
}

#[test]
fn division_by_zero_is_an_arithmetic_error() {
    assert_eq!(failure("print 1 / 0"),
               InterpretError::Runtime(RuntimeError::DivisionByZero));
}

#[test]
fn oversized_repetition_is_refused() {
    assert_kind("print \"abc\" * 100000000", ErrorKind::Arithmetic);
}

#[test]
fn failed_assignment_leaves_environment_untouched() {
    let mut context = Context::new();

    assert!(context.execute_line("z = 1 / (1 - 1)").is_err());
    let err = context.execute_line("print z").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Name);
    assert!(context.environment.is_empty());
}

#[test]
fn failed_reassignment_keeps_the_old_value() {
    let mut context = Context::new();

    context.execute_line("x = 10").unwrap();
    assert!(context.execute_line("x = x + undefined_name").is_err());
    assert!(context.execute_line("x = (x").is_err());

    let result = context.execute_line("print x").unwrap().unwrap();
    assert_eq!(result.to_string(), "10");
}

#[test]
fn errors_do_not_end_the_session() {
    let mut context = Context::new();

    assert!(context.execute_line("print nope").is_err());
    assert!(context.execute_line("print (").is_err());

    let result = context.execute_line("print 1 + 1").unwrap().unwrap();
    assert_eq!(result.to_string(), "2");
}

#[test]
fn unassigned_unicode_identifier_is_a_name_error() {
    let err = failure("print π");

    assert_eq!(err.kind(), ErrorKind::Name);
    assert_eq!(err.to_string(), "Variable 'π' is not defined");
}
