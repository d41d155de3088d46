//! # calcline
//!
//! calcline is a single-line expression interpreter written in Rust.
//! Each line is tokenized, lexed, converted to postfix form with the
//! shunting-yard algorithm and evaluated on a value stack. Lines may print an
//! expression, assign it to a variable, or simply evaluate it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines statements and operators.
///
/// This module declares the operator set with its precedence table and the
/// `Statement` enum that the parser produces and the evaluator executes.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Groups errors into the categories reported to front ends.
pub mod error;
/// Orchestrates the entire process of line execution.
///
/// This module ties together tokenizing, lexing, postfix conversion,
/// evaluation and the environment.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

pub use crate::{
    error::{ErrorKind, InterpretError},
    interpreter::evaluator::core::{Context, Outcome},
};

/// Executes one line against `context`.
///
/// This is the boundary used by front ends: the result renders with
/// `Display`, and errors carry both a message and an [`ErrorKind`].
///
/// # Errors
/// Returns the first lexing, syntax or runtime error raised by the line.
///
/// # Examples
/// ```
/// use calcline::{Context, execute_line};
///
/// let mut context = Context::new();
/// let shown = execute_line(&mut context, "print 2 + 3 * 4").unwrap().unwrap();
///
/// assert_eq!(shown.to_string(), "14");
/// ```
pub fn execute_line(context: &mut Context, line: &str) -> Result<Option<Outcome>, InterpretError> {
    context.execute_line(line)
}

/// Formats an error the way the command-line front end reports it.
///
/// Interactive and pipe-mode errors read `Error: <message>`; errors in a script
/// run also name the failing line, `Error on line <n>: <message>`.
///
/// # Examples
/// ```
/// use calcline::{Context, render_error};
///
/// let err = Context::new().execute_line("print y").unwrap_err();
///
/// assert_eq!(render_error(&err, None), "Error: Variable 'y' is not defined");
/// assert_eq!(render_error(&err, Some(3)), "Error on line 3: Variable 'y' is not defined");
/// ```
#[must_use]
pub fn render_error(error: &InterpretError, line: Option<usize>) -> String {
    match line {
        Some(line) => format!("Error on line {line}: {error}"),
        None => format!("Error: {error}"),
    }
}

/// Executes one interactive line and renders what the front end prints.
///
/// A result becomes `Result: <display>`, a blank line renders nothing and a
/// failure becomes the `Err` text meant for standard error.
///
/// # Errors
/// Returns the rendered error message if the line fails.
///
/// # Examples
/// ```
/// use calcline::{Context, render_line};
///
/// let mut context = Context::new();
///
/// assert_eq!(render_line(&mut context, "x = 2 * 3"), Ok(Some("Result: x = 6".to_string())));
/// assert_eq!(render_line(&mut context, ""), Ok(None));
/// ```
pub fn render_line(context: &mut Context, line: &str) -> Result<Option<String>, String> {
    match context.execute_line(line) {
        Ok(outcome) => Ok(outcome.map(|outcome| format!("Result: {outcome}"))),
        Err(e) => Err(render_error(&e, None)),
    }
}

/// Executes every line of `source` in a fresh context.
///
/// Lines run in order and share one environment. Execution stops at the first
/// failing line. When `auto_print` is set, the last result produced is printed
/// to standard output.
///
/// # Errors
/// Returns the error of the first failing line.
///
/// # Examples
/// ```
/// use calcline::get_result;
///
/// // Variables persist from one line to the next.
/// let source = "x = 2\nprint x * 21";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Reading a variable that was never assigned fails.
/// let source = "y = x + 1";
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Option<Outcome>, InterpretError> {
    let mut context = Context::new();
    let mut result = None;

    for (index, line) in source.lines().enumerate() {
        debug!(line = index + 1, source = line, "executing");
        if let Some(outcome) = context.execute_line(line)? {
            result = Some(outcome);
        }
    }

    if auto_print && let Some(outcome) = &result {
        println!("{outcome}");
    }

    Ok(result)
}
