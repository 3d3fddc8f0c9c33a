//! gain::validation — input guards for the gain-window search.
//!
//! Purpose
//! -------
//! Check the price-series preconditions once, before the recursion runs:
//! enough observations to form a delta series, and finite values
//! throughout. A successful return guarantees the recursive search can
//! index and sum freely without re-checking.

use crate::gain::errors::{GainError, GainResult};

/// Validate a price series for the maximum-gain window search.
///
/// Parameters
/// ----------
/// - `prices`: `&[f64]`
///   Chronologically ordered price series. Must contain at least 2
///   elements, all finite.
///
/// Returns
/// -------
/// `GainResult<()>`
///   `Ok(())` when the series satisfies both constraints, otherwise the
///   first violated constraint as a [`GainError`].
///
/// Errors
/// ------
/// - `GainError::InsufficientData(len)`
///   Returned when `prices.len() < 2`; no delta can be formed.
/// - `GainError::InvalidData(value)`
///   Returned for the first non-finite element encountered.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via [`GainError`].
pub fn validate_prices(prices: &[f64]) -> GainResult<()> {
    if prices.len() < 2 {
        return Err(GainError::InsufficientData(prices.len()));
    }

    for &value in prices {
        if !value.is_finite() {
            return Err(GainError::InvalidData(value));
        }
    }

    Ok(())
}
