/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation and repetition, comparisons and
/// the logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the postfix stack machine, statement execution and the runtime
/// context that owns the environment.
pub mod core;
