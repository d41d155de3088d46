/// Dispatch of binary operators to their handlers.
pub mod core;

/// `+`, `-`, `*` and `/`, including string concatenation and repetition.
pub mod arithmetic;

/// Equality and ordering operators.
pub mod comparison;

/// `and` and `or`.
pub mod logic;
