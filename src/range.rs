//! Uniform draws from literal ranges.

use crate::error::GenError;
use crate::generator::Generator;

/// A uniform integer in `[low, high]`, inclusive at both ends.
///
/// `low > high` fails with an invalid-range error, checked before any
/// randomness is consumed. `int_range(n, n)` always yields exactly `n`.
pub fn int_range(low: i64, high: i64) -> Generator<i64> {
    Generator::from_fn(move |source| {
        if low > high {
            return Err(GenError::InvalidIntRange { low, high });
        }
        let span = i128::from(high) - i128::from(low) + 1;
        // The full i64 domain spans one more value than next_bounded can
        // express; a raw draw is already uniform over it.
        if span > i128::from(u64::MAX) {
            return Ok(source.next_u64() as i64);
        }
        let offset = source.next_bounded(span as u64);
        Ok((i128::from(low) + i128::from(offset)) as i64)
    })
}

/// A uniform double in `[low, high)`.
///
/// `low > high`, or a NaN bound, fails with an invalid-range error, checked
/// before any randomness is consumed. The degenerate `low == high` range
/// always yields `low`.
pub fn double_range(low: f64, high: f64) -> Generator<f64> {
    Generator::from_fn(move |source| {
        // A NaN bound fails this comparison too.
        if !(low <= high) {
            return Err(GenError::InvalidDoubleRange { low, high });
        }
        let draw = source.next_double();
        let span = high - low;
        let value = if span.is_finite() {
            low + draw * span
        } else {
            // The span overflowed; interpolate term-wise, which stays finite
            // for finite bounds.
            low * (1.0 - draw) + high * draw
        };
        // Rounding at the top of the interval can land exactly on `high`;
        // fold it back to `low`, which also covers the degenerate range.
        if value >= high {
            Ok(low)
        } else {
            Ok(value)
        }
    })
}
