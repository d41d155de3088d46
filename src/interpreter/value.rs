/// The `Value` enum and its conversions.
///
/// Values are what the evaluator pushes on its stack and what the environment
/// stores. There are exactly three kinds: numbers, strings and booleans.
pub mod core;
