//! gain::max_window — divide-and-conquer maximum-gain window search.
//!
//! Purpose
//! -------
//! Locate the contiguous run of consecutive days that maximizes cumulative
//! price change (or minimizes cumulative loss when every change is
//! negative). The search runs over the derived delta series
//! `d[i] = price[i+1] − price[i]` and reports the winning sum together with
//! the inclusive *price*-index range realizing it.
//!
//! Key behaviors
//! -------------
//! - Build the delta series (length n−1) and run recursive maximum-subarray
//!   search over it: split at the midpoint, solve both halves, and form a
//!   crossing candidate by extending maximally leftward from `mid` and
//!   rightward from `mid + 1`, accumulating contiguous sums from zero and
//!   recording the index that achieves each extension's maximum.
//! - Break ties deterministically in evaluation order: left-only, then
//!   right-only, then crossing. The order is not load-bearing for the
//!   winning sum but keeps the reported range reproducible.
//! - Map the winning delta range `[s, e]` back to the price range
//!   `[s, e + 1]`, so the result always denotes at least two prices.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input is validated once up front ([`validate_prices`]); the recursion
//!   assumes finite values and `n ≥ 2`.
//! - This is a maximum-subarray search, not a search for a strictly
//!   positive gain: an all-negative delta series yields the single
//!   least-negative delta, never an empty range and never zero. Callers
//!   wanting "no meaningful gain" semantics inspect the sign of
//!   [`GainOutcome::total_change`] themselves.
//! - Because delta sums telescope, the winning sum always equals
//!   `price[range.end] − price[range.start]`.
//!
//! Conventions
//! -----------
//! - `mid = (low + high) / 2` with integer division; the left half is
//!   `[low, mid]`, the right half `[mid + 1, high]`.
//!
//! Downstream usage
//! ----------------
//! - Callers highlight the returned [`IndexRange`] on the original price
//!   series; this module produces data only and knows nothing about
//!   rendering.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the worked examples (prices `[1, 2, 3, 2, 5]` → sum 4
//!   over price range `[0, 4]`; all-negative `[5, 4, 3, 1]` → −1 over
//!   `[0, 1]`), the telescoping identity, the two-element base case, and
//!   the validation error path.
//! - Property tests under `tests/` compare the winning sum against an
//!   O(n²) brute force on integer-valued prices.

use crate::gain::errors::GainResult;
use crate::gain::validation::validate_prices;

/// Inclusive index range `[start, end]` into a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    /// First price index of the range.
    pub start: usize,
    /// Last price index of the range (inclusive).
    pub end: usize,
}

/// GainOutcome — result of the maximum-gain window search.
///
/// Purpose
/// -------
/// Hold the winning cumulative change and the inclusive price-index range
/// that realizes it, as a small value object with read-only accessors.
///
/// Fields
/// ------
/// - `total_change`: `f64`
///   Sum of day-over-day deltas over the winning range; equal to
///   `price[range.end] − price[range.start]`.
/// - `range`: [`IndexRange`]
///   Inclusive price-index range. Always spans at least two prices
///   (`range.end > range.start`).
///
/// Invariants
/// ----------
/// - `range.end` indexes a valid *price*, not a delta: the winning delta
///   range `[s, e]` is stored as `[s, e + 1]`.
/// - `total_change` is finite whenever construction succeeds; non-finite
///   prices are rejected during validation.
///
/// Notes
/// -----
/// - Cheap to copy; does not own or borrow the original price data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainOutcome {
    total_change: f64,
    range: IndexRange,
}

impl GainOutcome {
    /// Find the contiguous window of maximum cumulative change.
    ///
    /// Parameters
    /// ----------
    /// - `prices`: `&[f64]`
    ///   Chronologically ordered price series of length n ≥ 2 with finite
    ///   values throughout.
    ///
    /// Returns
    /// -------
    /// `GainResult<GainOutcome>`
    ///   - `Ok(outcome)` with the maximal delta-sum and the inclusive
    ///     price-index range realizing it.
    ///   - `Err(GainError)` when validation fails.
    ///
    /// Errors
    /// ------
    /// - `GainError::InsufficientData(len)`
    ///   Returned when `prices.len() < 2`.
    /// - `GainError::InvalidData(value)`
    ///   Returned when any price is NaN or ±∞.
    ///
    /// Panics
    /// ------
    /// - Never panics on validated input; index arithmetic stays within
    ///   the delta series by construction.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use stock_analytics::gain::GainOutcome;
    ///
    /// let outcome = GainOutcome::max_gain_window(&[1.0, 2.0, 3.0, 2.0, 5.0]).unwrap();
    ///
    /// assert_eq!(outcome.total_change(), 4.0);
    /// assert_eq!(outcome.range().start, 0);
    /// assert_eq!(outcome.range().end, 4);
    /// ```
    pub fn max_gain_window(prices: &[f64]) -> GainResult<Self> {
        validate_prices(prices)?;
        let deltas: Vec<f64> = prices.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let (total_change, start, end) = max_subarray(&deltas, 0, deltas.len() - 1);

        Ok(GainOutcome { total_change, range: IndexRange { start, end: end + 1 } })
    }

    /// Cumulative change over the winning range.
    pub fn total_change(&self) -> f64 {
        self.total_change
    }

    /// Inclusive price-index range realizing [`total_change`](Self::total_change).
    pub fn range(&self) -> IndexRange {
        self.range
    }
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Recursively find the maximum-sum contiguous sub-range of `deltas[low..=high]`.
///
/// Parameters
/// ----------
/// - `deltas`: `&[f64]`
///   Full delta series; only `[low, high]` is considered.
/// - `low`, `high`: `usize`
///   Inclusive bounds with `low <= high < deltas.len()`.
///
/// Returns
/// -------
/// `(f64, usize, usize)`
///   Winning sum and its inclusive delta-index range.
///
/// Notes
/// -----
/// - Ties resolve in evaluation order: the left candidate beats the right
///   and crossing candidates, and the right candidate beats the crossing
///   one. This keeps the reported range deterministic when several
///   sub-ranges share the maximal sum.
fn max_subarray(deltas: &[f64], low: usize, high: usize) -> (f64, usize, usize) {
    if low == high {
        return (deltas[low], low, high);
    }

    let mid = (low + high) / 2;
    let (left_sum, left_start, left_end) = max_subarray(deltas, low, mid);
    let (right_sum, right_start, right_end) = max_subarray(deltas, mid + 1, high);
    let (cross_sum, cross_start, cross_end) = max_crossing(deltas, low, mid, high);

    if left_sum >= right_sum && left_sum >= cross_sum {
        (left_sum, left_start, left_end)
    } else if right_sum >= left_sum && right_sum >= cross_sum {
        (right_sum, right_start, right_end)
    } else {
        (cross_sum, cross_start, cross_end)
    }
}

/// Best sub-range sum that crosses the midpoint between `mid` and `mid + 1`.
///
/// Parameters
/// ----------
/// - `deltas`: `&[f64]`
///   Full delta series.
/// - `low`, `mid`, `high`: `usize`
///   Bounds with `low <= mid < high`; the leftward extension scans
///   `mid..=low`, the rightward one `mid + 1..=high`.
///
/// Returns
/// -------
/// `(f64, usize, usize)`
///   Combined best sum and the delta indices where the winning leftward
///   and rightward extensions end.
///
/// Notes
/// -----
/// - Both accumulators start from zero and grow by contiguous extension;
///   every crossing candidate therefore includes `deltas[mid]` and
///   `deltas[mid + 1]` at minimum.
#[inline]
fn max_crossing(deltas: &[f64], low: usize, mid: usize, high: usize) -> (f64, usize, usize) {
    let mut best_left = f64::NEG_INFINITY;
    let mut running = 0.0;
    let mut cross_start = mid;
    for i in (low..=mid).rev() {
        running += deltas[i];
        if running > best_left {
            best_left = running;
            cross_start = i;
        }
    }

    let mut best_right = f64::NEG_INFINITY;
    running = 0.0;
    let mut cross_end = mid + 1;
    for (i, &delta) in deltas.iter().enumerate().take(high + 1).skip(mid + 1) {
        running += delta;
        if running > best_right {
            best_right = running;
            cross_end = i;
        }
    }

    (best_left + best_right, cross_start, cross_end)
}
