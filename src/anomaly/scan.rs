//! anomaly::scan — windowed divide-and-conquer pairwise anomaly scan.
//!
//! Purpose
//! -------
//! Flag every pair of observations whose absolute rate of change per
//! elapsed day strictly exceeds a caller-supplied threshold. The scan
//! recursively splits the series, solves each half, and additionally
//! brute-forces a *boundary strip* — the points within a fixed day-window
//! of the segment midpoint — to catch pairs that straddle the partition
//! boundary.
//!
//! Key behaviors
//! -------------
//! - Segments of length ≤ 3 are brute-forced directly: every pair is rated
//!   as `|value_a − value_b| / days_between`, with strictly positive
//!   elapsed days required (same-day pairs are never candidates) and
//!   strict `>` against the threshold.
//! - Longer segments split at `len / 2`; results are the concatenation of
//!   the left scan, the right scan, and the brute-forced strip. Strip
//!   membership is strict: `|days from midpoint| < window_days`.
//! - The raw concatenation can report the same unordered pair more than
//!   once, because the strip is drawn from the whole segment and may
//!   overlap a half that already reported the pair. The public entry point
//!   collapses such duplicates by canonical unordered pair identity
//!   (both endpoints' timestamp and value), preserving first-encounter
//!   order; multiplicity is an artifact of where recursion boundaries
//!   land, not a signal.
//!
//! Invariants & assumptions
//! ------------------------
//! - The series is ordered by ascending timestamp (caller's invariant;
//!   this component does not re-sort — only the `sorting` subtree sorts).
//! - Parameters and values are validated once up front
//!   ([`validate_scan_input`]); the recursion assumes finite values and a
//!   comparable threshold.
//! - An empty or single-point series yields an empty result, not an error.
//! - Within a reported pair, `first` precedes `second` in the scanned
//!   segment, so with an ordered input `first.timestamp() <=
//!   second.timestamp()`.
//!
//! Conventions
//! -----------
//! - The strip window is a caller parameter (`window_days`) rather than a
//!   fixed constant; day gaps are whole calendar days.
//!
//! Downstream usage
//! ----------------
//! - Callers typically sort a merged series by date first (via the
//!   `sorting` subtree) and then scan it; the returned records carry full
//!   observation clones so they can be rendered or reported without
//!   re-indexing the input.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the strict threshold boundary, same-day exclusion,
//!   deduplication, window monotonicity on a clustered-vs-spread series,
//!   and the empty/single-point cases.
//! - Property tests under `tests/` check that the scan output is always a
//!   subset of the all-pairs brute force and equals it once the window
//!   covers the whole span.
//!
//! Performance
//! -----------
//! - Intended as sub-quadratic via the strip restriction, but the strip is
//!   bounded by the time window, not by count: when observations cluster
//!   densely inside the window the scan degrades toward O(n²). Acceptable
//!   at single-asset daily scale; documented rather than hidden.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::anomaly::errors::AnomalyResult;
use crate::anomaly::validation::validate_scan_input;
use crate::series::Observation;

/// AnomalyRecord — one flagged pair of observations.
///
/// Purpose
/// -------
/// Hold a pair whose rate of change per elapsed day strictly exceeded the
/// scan threshold, together with that rate, as a small value object with
/// read-only accessors.
///
/// Fields
/// ------
/// - `rate_per_day`: `f64`
///   `|first.value − second.value| / days_between(first, second)`; always
///   strictly greater than the scan threshold and computed over a
///   strictly positive day gap.
/// - `first`, `second`: [`Observation`]
///   The paired observations, cloned out of the input series. `first`
///   precedes `second` in the scanned segment.
///
/// Invariants
/// ----------
/// - `first.timestamp() != second.timestamp()` — same-day pairs are never
///   constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyRecord {
    rate_per_day: f64,
    first: Observation,
    second: Observation,
}

impl AnomalyRecord {
    /// Absolute value change per elapsed day for this pair.
    pub fn rate_per_day(&self) -> f64 {
        self.rate_per_day
    }

    /// The earlier-positioned observation of the pair.
    pub fn first(&self) -> &Observation {
        &self.first
    }

    /// The later-positioned observation of the pair.
    pub fn second(&self) -> &Observation {
        &self.second
    }
}

/// Scan an ordered series for pairs exceeding a rate-per-day threshold.
///
/// Parameters
/// ----------
/// - `series`: `&[Observation]`
///   Observation series ordered by ascending timestamp. May be empty.
/// - `threshold`: `f64`
///   Rate threshold; a pair is flagged only when its rate is *strictly*
///   greater. Non-positive thresholds are permitted and degenerate to
///   flagging every distinct-day pair the recursion examines.
/// - `window_days`: `i64`
///   Boundary-strip half-width in whole days (strict membership:
///   `|days from midpoint| < window_days`). Larger windows can only add
///   candidate pairs, never remove previously found ones.
///
/// Returns
/// -------
/// `AnomalyResult<Vec<AnomalyRecord>>`
///   Flagged pairs, deduplicated by unordered pair identity, in
///   first-encounter order. Empty when the series has fewer than two
///   points or nothing exceeds the threshold.
///
/// Errors
/// ------
/// - `AnomalyError::InvalidThreshold(t)`
///   Returned when `threshold` is NaN.
/// - `AnomalyError::InvalidWindow(days)`
///   Returned when `window_days < 0`.
/// - `AnomalyError::InvalidData(value)`
///   Returned when any observation value is non-finite.
///
/// Panics
/// ------
/// - Never panics on validated input.
///
/// Examples
/// --------
/// ```rust
/// use chrono::NaiveDate;
/// use stock_analytics::anomaly::find_anomalies;
/// use stock_analytics::series::Observation;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let series = vec![
///     Observation::new(d(1), 100.0),
///     Observation::new(d(2), 100.5),
///     Observation::new(d(3), 140.0),
/// ];
///
/// let anomalies = find_anomalies(&series, 10.0, 10).unwrap();
/// assert_eq!(anomalies.len(), 2); // (d1, d3) at 20/day and (d2, d3) at 39.5/day
/// ```
pub fn find_anomalies(
    series: &[Observation], threshold: f64, window_days: i64,
) -> AnomalyResult<Vec<AnomalyRecord>> {
    validate_scan_input(series, threshold, window_days)?;
    if series.len() < 2 {
        return Ok(Vec::new());
    }

    Ok(dedupe(scan_segment(series, threshold, window_days)))
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Recursively scan one segment; may report the same pair more than once.
///
/// Parameters
/// ----------
/// - `segment`: `&[Observation]`
///   Contiguous slice of the full series, still timestamp-ordered.
/// - `threshold`, `window_days`
///   Passed through unchanged to every level.
///
/// Returns
/// -------
/// `Vec<AnomalyRecord>`
///   Left results, then right results, then strip results, in that order.
///   Deduplication happens once, at the public entry point.
fn scan_segment(segment: &[Observation], threshold: f64, window_days: i64) -> Vec<AnomalyRecord> {
    if segment.len() <= 3 {
        return brute_force(segment, threshold);
    }

    let mid = segment.len() / 2;
    let mut found = scan_segment(&segment[..mid], threshold, window_days);
    found.extend(scan_segment(&segment[mid..], threshold, window_days));
    found.extend(scan_strip(segment, mid, threshold, window_days));
    found
}

/// Brute-force the boundary strip around the segment midpoint.
///
/// Parameters
/// ----------
/// - `segment`: `&[Observation]`
///   The full segment (not just the cross-boundary points).
/// - `mid`: `usize`
///   Index of the midpoint observation whose timestamp anchors the strip.
///
/// Returns
/// -------
/// `Vec<AnomalyRecord>`
///   All flagged pairs among the points with
///   `|days from segment[mid]| < window_days` (strict).
fn scan_strip(
    segment: &[Observation], mid: usize, threshold: f64, window_days: i64,
) -> Vec<AnomalyRecord> {
    let pivot = segment[mid].timestamp();
    let strip: Vec<Observation> = segment
        .iter()
        .filter(|obs| obs.timestamp().signed_duration_since(pivot).num_days().abs() < window_days)
        .cloned()
        .collect();
    brute_force(&strip, threshold)
}

/// Rate every pair in a small point set against the threshold.
///
/// Parameters
/// ----------
/// - `points`: `&[Observation]`
///   Points to pair exhaustively; order is preserved into the records.
///
/// Returns
/// -------
/// `Vec<AnomalyRecord>`
///   Pairs with a strictly positive day gap whose rate strictly exceeds
///   the threshold, in (i, j) scan order with `i < j`.
fn brute_force(points: &[Observation], threshold: f64) -> Vec<AnomalyRecord> {
    let mut found = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let days = points[j]
                .timestamp()
                .signed_duration_since(points[i].timestamp())
                .num_days()
                .abs();
            if days > 0 {
                let rate = (points[i].value() - points[j].value()).abs() / days as f64;
                if rate > threshold {
                    found.push(AnomalyRecord {
                        rate_per_day: rate,
                        first: points[i].clone(),
                        second: points[j].clone(),
                    });
                }
            }
        }
    }
    found
}

/// Collapse repeated reports of the same unordered pair.
///
/// Parameters
/// ----------
/// - `records`: `Vec<AnomalyRecord>`
///   Raw scan output, possibly containing duplicates from strip/half
///   overlap.
///
/// Returns
/// -------
/// `Vec<AnomalyRecord>`
///   First occurrence of each unordered pair, in encounter order. Pair
///   identity is the canonically ordered `(timestamp, value bits)` of
///   both endpoints, so distinct observations sharing a date never
///   collapse into one another.
fn dedupe(records: Vec<AnomalyRecord>) -> Vec<AnomalyRecord> {
    type Endpoint = (NaiveDate, u64);
    let mut seen: HashSet<(Endpoint, Endpoint)> = HashSet::new();

    records
        .into_iter()
        .filter(|record| {
            let a: Endpoint = (record.first.timestamp(), record.first.value().to_bits());
            let b: Endpoint = (record.second.timestamp(), record.second.value().to_bits());
            let key = if a <= b { (a, b) } else { (b, a) };
            seen.insert(key)
        })
        .collect()
}
