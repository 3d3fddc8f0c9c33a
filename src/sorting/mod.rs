//! sorting — stable merge sort over arbitrary record fields.
//!
//! Purpose
//! -------
//! Implement the StableSort component: given a sequence of records and a
//! sort key — either a strongly typed selector function or a field name
//! resolved at runtime — produce a new sequence ordered non-decreasingly by
//! that key, with the relative order of equal-keyed records preserved.
//!
//! Key behaviors
//! -------------
//! - Expose the typed entry point [`sort_by_key`] (selector capability,
//!   infallible) and the named-field entry point [`sort_by_field`]
//!   (fallible; see [`SortError`]).
//! - Sort with a classic top-down merge sort whose merge step takes the
//!   left element on equal keys (`<=`), which is exactly what yields
//!   stability.
//! - Extract and validate every key once, up front, so that failures
//!   surface before any element moves.
//!
//! Invariants & assumptions
//! ------------------------
//! - The output is always a permutation of the input; no record is dropped
//!   or duplicated.
//! - Input order is whatever the caller supplies — this component imposes
//!   no timestamp-ordering precondition, unlike the gain and anomaly
//!   subtrees.
//! - Empty input yields empty output, not an error.
//!
//! Conventions
//! -----------
//! - Errors are reported via [`SortError`] / [`SortResult`]; the conversion
//!   to Python exceptions lives behind the `python-bindings` feature.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the surface as:
//!
//!   ```rust
//!   use stock_analytics::sorting::{sort_by_field, sort_by_key};
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`merge`] cover stability, idempotence, emptiness, and
//!   both error branches; unit tests in [`errors`] cover `Display`
//!   payloads. Property tests under `tests/` compare against the standard
//!   library's stable sort.

pub mod errors;
pub mod merge;

pub use self::errors::{SortError, SortResult};
pub use self::merge::{sort_by_field, sort_by_key};
