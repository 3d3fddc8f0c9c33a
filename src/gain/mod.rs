//! gain — maximum cumulative gain (or least loss) window search.
//!
//! Purpose
//! -------
//! Implement the GainWindowFinder component: given a chronologically
//! ordered price series, find the contiguous run of consecutive days that
//! maximizes the sum of day-over-day changes, and report that sum together
//! with the inclusive price-index range realizing it.
//!
//! Key behaviors
//! -------------
//! - Expose [`GainOutcome::max_gain_window`](max_window::GainOutcome::max_gain_window)
//!   as the single entry point; it validates, derives the delta series,
//!   and runs the recursive maximum-subarray search.
//! - Centralize the series preconditions (length ≥ 2, finite values) in
//!   [`validate_prices`].
//! - Report failures via [`GainError`] / [`GainResult`]; the Python
//!   exception bridge lives behind the `python-bindings` feature.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input series is assumed non-decreasing in timestamp; this
//!   component sees only the prices and does not re-sort (only the
//!   `sorting` subtree sorts).
//! - The result always denotes at least two prices; an all-negative
//!   series yields the least-negative single delta rather than an empty
//!   or zero result.
//! - Tie-breaking between equal-sum candidates is fixed (left, right,
//!   crossing) so results are reproducible.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the surface as:
//!
//!   ```rust
//!   use stock_analytics::gain::{GainOutcome, GainResult};
//!
//!   # fn run(prices: &[f64]) -> GainResult<()> {
//!   let outcome = GainOutcome::max_gain_window(prices)?;
//!   let _ = (outcome.total_change(), outcome.range());
//!   # Ok(())
//!   # }
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`max_window`] pin the worked examples, tie-breaking,
//!   and the telescoping identity; [`validation`] covers the guard
//!   branches; [`errors`] covers `Display` payloads. Property tests under
//!   `tests/` compare against an O(n²) brute force.

pub mod errors;
pub mod max_window;
pub mod validation;

pub use self::errors::{GainError, GainResult};
pub use self::max_window::{GainOutcome, IndexRange};
pub use self::validation::validate_prices;
