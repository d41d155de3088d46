/// The tokenizer module splits a line into raw lexemes.
///
/// It is the first stage of interpretation: it finds the boundaries of
/// numbers, words, operator symbols, parentheses and string literals, and
/// reports characters that cannot start any of them.
pub mod tokenizer;
/// The lexer module turns raw lexemes into typed tokens.
///
/// # Responsibilities
/// - Recognises the `print`, `true` and `false` keywords in any letter case.
/// - Resolves operator symbols, telling negation from subtraction.
/// - Parses numeric literals and strips string quotes.
pub mod lexer;
/// The parser module orders tokens for evaluation.
///
/// It classifies each line as a print statement, an assignment or an
/// expression, and rewrites the expression in postfix order with the
/// shunting-yard algorithm.
pub mod parser;
/// The evaluator module executes postfix expressions.
///
/// # Responsibilities
/// - Runs the value stack machine over postfix tokens.
/// - Applies unary and binary operators with their type rules.
/// - Executes statements and writes assignments to the environment.
pub mod evaluator;
/// The variable store shared by all lines of a session.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, strings or booleans, with conversions used by the
/// operators and a `Display` form used for output and concatenation.
pub mod value;
