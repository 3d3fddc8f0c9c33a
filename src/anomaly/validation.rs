//! anomaly::validation — input guards for the anomaly scan.
//!
//! Purpose
//! -------
//! Check the scan parameters and series values once, before the recursion
//! runs. A successful return guarantees every rate computed downstream is
//! finite and every comparison against the threshold is meaningful.
//!
//! Conventions
//! -----------
//! - An empty or single-point series is *valid* here; the scan returns an
//!   empty result for it rather than an error.
//! - Timestamp ordering is the caller's invariant (per the crate's data
//!   model) and is not re-checked or repaired here.

use crate::anomaly::errors::{AnomalyError, AnomalyResult};
use crate::series::Observation;

/// Validate scan parameters and series values.
///
/// Parameters
/// ----------
/// - `series`: `&[Observation]`
///   Observation series, already ordered by ascending timestamp. May be
///   empty.
/// - `threshold`: `f64`
///   Rate-per-day threshold. Non-positive values are permitted (they
///   degenerate to flagging all distinct-day pairs); NaN is rejected.
/// - `window_days`: `i64`
///   Boundary-strip half-width in whole days. Zero is permitted (empty
///   strips); negative values are rejected.
///
/// Returns
/// -------
/// `AnomalyResult<()>`
///   `Ok(())` when all constraints hold, otherwise the first violated
///   constraint as an [`AnomalyError`].
///
/// Errors
/// ------
/// - `AnomalyError::InvalidThreshold(t)`
///   Returned when `threshold` is NaN.
/// - `AnomalyError::InvalidWindow(days)`
///   Returned when `window_days < 0`.
/// - `AnomalyError::InvalidData(value)`
///   Returned for the first non-finite observation value.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via [`AnomalyError`].
pub fn validate_scan_input(
    series: &[Observation], threshold: f64, window_days: i64,
) -> AnomalyResult<()> {
    if threshold.is_nan() {
        return Err(AnomalyError::InvalidThreshold(threshold));
    }

    if window_days < 0 {
        return Err(AnomalyError::InvalidWindow(window_days));
    }

    for observation in series {
        if !observation.value().is_finite() {
            return Err(AnomalyError::InvalidData(observation.value()));
        }
    }

    Ok(())
}
