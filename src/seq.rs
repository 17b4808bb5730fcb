//! Sequence utilities: bounds-checked slicing and stepped range generation.

use crate::error::{Result, SpotcheckError};

/// Return a copy of `source[start..end]`.
///
/// The range is rejected rather than clamped: `start` must land inside the
/// sequence, `end` must not run past it, and the range must be non-empty.
/// The returned vector owns its elements, so mutating either sequence
/// afterwards leaves the other untouched.
pub fn slice<T: Clone>(source: &[T], start: usize, end: usize) -> Result<Vec<T>> {
    if start >= source.len() || end > source.len() || start >= end {
        return Err(SpotcheckError::OutOfRange {
            start,
            end,
            length: source.len(),
        });
    }
    Ok(source[start..end].to_vec())
}

/// Generate the arithmetic sequence from `start` (inclusive) to `end`
/// (exclusive), advancing by `step`.
///
/// A positive step counts up while the value is below `end`; a negative step
/// counts down while the value is above `end`. A zero step never advances and
/// is rejected with [`SpotcheckError::InvalidStep`]. A `start` already past
/// `end` yields an empty sequence.
pub fn generate_range(start: i64, end: i64, step: i64) -> Result<Vec<i64>> {
    if step == 0 {
        return Err(SpotcheckError::InvalidStep);
    }

    let mut values = Vec::new();
    let mut value = start;
    while (step > 0 && value < end) || (step < 0 && value > end) {
        values.push(value);
        // Ending early beats wrapping around at the i64 boundary.
        value = match value.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(values)
}
