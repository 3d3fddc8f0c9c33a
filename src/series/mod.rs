//! series — shared data model for dated price observations.
//!
//! Purpose
//! -------
//! Centralize the record types that the algorithmic subtrees (`sorting`,
//! `gain`, `anomaly`) consume: a single dated observation with an optional
//! set of extra named numeric columns, and the dynamic sort-key value used
//! by named-field sorting.
//!
//! Key behaviors
//! -------------
//! - Define [`Observation`] as an immutable value object: timestamp, primary
//!   numeric value, and extra `name → value` columns, all set at
//!   construction and read through accessors.
//! - Define [`FieldValue`] as the date-or-number key produced by
//!   [`Observation::field`], ordered within a variant and incomparable
//!   across variants.
//!
//! Invariants & assumptions
//! ------------------------
//! - An [`Observation`] is never mutated after construction; algorithms
//!   clone observations into their outputs instead of aliasing mutable
//!   state.
//! - Timestamps are calendar dates (`chrono::NaiveDate`); elapsed time
//!   between observations is measured in whole days.
//! - This subtree performs no I/O and holds no reference to a data source
//!   or renderer; ingestion and visualization live outside the crate.
//!
//! Conventions
//! -----------
//! - The canonical field names `"date"` and `"value"` resolve to the
//!   timestamp and primary value respectively; any other name is looked up
//!   among the extra columns.
//! - Extra columns are numeric only. Callers that need to sort by a
//!   non-numeric attribute should use the typed selector API in
//!   [`crate::sorting`] instead of named-field lookup.
//!
//! Downstream usage
//! ----------------
//! - `sorting::sort_by_field` resolves [`FieldValue`] keys via
//!   [`Observation::field`].
//! - `anomaly::find_anomalies` reads timestamps and values through the
//!   accessors and clones matched observations into
//!   [`crate::anomaly::AnomalyRecord`] pairs.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`observation`] cover canonical and extra field
//!   resolution, the `None` path for unknown names, and the partial order
//!   on [`FieldValue`] (including cross-variant incomparability).

pub mod observation;

pub use self::observation::{FieldValue, Observation};
