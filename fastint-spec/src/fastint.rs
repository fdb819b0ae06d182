//! Fastint classification

use crate::config::FastintRange;

/// Check whether `x` is a fastint under the default range.
///
/// NOTE: signed zero is not told apart from zero, so `-0.0` classifies
/// as a fastint even though a runtime holding it as an integer would
/// lose the sign.
pub fn is_fastint(x: f64) -> bool {
    is_fastint_in(x, FastintRange::DEFAULT)
}

/// Check whether `x` is an integral double inside `range`
pub fn is_fastint_in(x: f64, range: FastintRange) -> bool {
    // NaN fails the floor comparison, infinities fail the range check
    x.floor() == x && range.contains(x)
}

/// Integer entry point: `x` must also survive conversion to `f64`
pub fn is_fastint_i64(x: i64) -> bool {
    is_exact_f64(x) && is_fastint(x as f64)
}

/// True if `x as f64` converts back to `x` unchanged
pub fn is_exact_f64(x: i64) -> bool {
    let f = x as f64;
    // i64::MAX rounds up to 2^63, which saturates back to i64::MAX
    f < 9_223_372_036_854_775_808.0 && f as i64 == x
}
