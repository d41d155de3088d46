use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Longest string, in bytes, that string repetition may produce.
pub const MAX_REPEAT_BYTES: usize = 1 << 24;

/// Truncates a number toward zero and converts it to a repeat count.
///
/// Negative counts become zero, matching the behaviour of repeating a string
/// a negative number of times. Counts beyond the exactly representable range
/// saturate to `usize::MAX`; [`checked_repeat`] rejects them for any
/// non-empty string.
///
/// ## Errors
/// Returns `RuntimeError::TypeError` for `NaN` and infinities.
///
/// ## Example
/// ```
/// use calcline::util::num::f64_to_repeat_count;
///
/// assert_eq!(f64_to_repeat_count(3.9).unwrap(), 3);
/// assert_eq!(f64_to_repeat_count(-2.0).unwrap(), 0);
/// assert_eq!(f64_to_repeat_count(1e300).unwrap(), usize::MAX);
/// assert!(f64_to_repeat_count(f64::NAN).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_repeat_count(value: f64) -> EvalResult<usize> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("Cannot repeat a string {value} times") });
    }

    let truncated = value.trunc();
    if truncated <= 0.0 {
        return Ok(0);
    }
    if truncated > MAX_SAFE_U64_INT as f64 {
        return Ok(usize::MAX);
    }

    Ok(usize::try_from(truncated as u64).unwrap_or(usize::MAX))
}

/// Repeats `text` `count` times, refusing results longer than
/// [`MAX_REPEAT_BYTES`].
///
/// ## Errors
/// Returns `RuntimeError::RepetitionTooLarge` if the result would exceed the
/// limit.
pub fn checked_repeat(text: &str, count: usize) -> EvalResult<String> {
    let too_large = || RuntimeError::RepetitionTooLarge { length: text.len(),
                                                          count,
                                                          limit: MAX_REPEAT_BYTES };

    match text.len().checked_mul(count) {
        Some(total) if total <= MAX_REPEAT_BYTES => Ok(text.repeat(count)),
        _ => Err(too_large()),
    }
}
