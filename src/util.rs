/// Numeric conversion helpers.
///
/// Provides the checked conversion used when a floating-point number is used
/// as a string repeat count, and the bounded repetition itself.
pub mod num;
