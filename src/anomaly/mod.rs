//! anomaly — rate-of-change spike/dip detection over dated series.
//!
//! Purpose
//! -------
//! Implement the AnomalyScanner component: given a price series already
//! ordered by ascending timestamp and a rate threshold, find every pair of
//! observations whose absolute value change per elapsed day strictly
//! exceeds the threshold. Pairs on the same calendar day are never
//! candidates.
//!
//! Key behaviors
//! -------------
//! - Expose [`find_anomalies`](scan::find_anomalies) as the single entry
//!   point; it validates, runs the windowed divide-and-conquer scan, and
//!   deduplicates the result by unordered pair identity.
//! - Centralize parameter and value preconditions in
//!   [`validate_scan_input`] (NaN threshold rejected, negative window
//!   rejected, values must be finite; `threshold <= 0` and empty series
//!   are permitted).
//! - Report failures via [`AnomalyError`] / [`AnomalyResult`]; the Python
//!   exception bridge lives behind the `python-bindings` feature.
//!
//! Invariants & assumptions
//! ------------------------
//! - Timestamp ordering is the caller's responsibility; this subtree does
//!   not re-sort its input (only the `sorting` subtree sorts).
//! - Output order is deterministic: left results, right results, strip
//!   results at each recursion level, first occurrence kept on
//!   deduplication.
//! - Worst-case cost degrades toward O(n²) when observations cluster
//!   inside the strip window; acceptable at single-asset daily scale and
//!   documented in [`scan`].
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the surface as:
//!
//!   ```rust
//!   use stock_analytics::anomaly::{find_anomalies, AnomalyRecord};
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`scan`] cover the strict threshold boundary, same-day
//!   exclusion, deduplication, and window monotonicity; [`validation`]
//!   covers the guard branches; [`errors`] covers `Display` payloads.
//!   Property tests under `tests/` compare against the all-pairs brute
//!   force.

pub mod errors;
pub mod scan;
pub mod validation;

pub use self::errors::{AnomalyError, AnomalyResult};
pub use self::scan::{find_anomalies, AnomalyRecord};
pub use self::validation::validate_scan_input;
