//! Final numeric resolution: extract the surviving number and apply the
//! sign/epoch rules that turn it into a calendar-relative year.

use crate::stages::helpers::first_number;

/// All "years before present" figures are anchored to this year.
const REFERENCE_YEAR: f64 = 2000.0;

/// Values at or below this magnitude (as negative years-ago) stay deep-time
/// figures; anything more recent converts to an absolute calendar year.
const DEEP_TIME_CUTOFF: f64 = -80_000.0;

/// Resolve the fully rewritten text to a signed year value.
///
/// Without a surviving `+` era flag the number is read as years before
/// [`REFERENCE_YEAR`]: it is negated, then recent values (above the
/// [`DEEP_TIME_CUTOFF`]) become `2000 - magnitude`. A `+` in the text leaves
/// the number untouched as an absolute calendar year. The result is the
/// truncated integer part.
pub fn resolve(text: &str) -> Option<i64> {
    let mut val = first_number(text)?;

    if !text.contains('+') {
        val = -val.abs();
        if val > DEEP_TIME_CUTOFF {
            val = REFERENCE_YEAR - val.abs();
        }
    }

    Some(val.trunc() as i64)
}
