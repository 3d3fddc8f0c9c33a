//! series::observation — dated observations and dynamic field keys.
//!
//! Purpose
//! -------
//! Provide the row type consumed by every algorithm in this crate: one
//! calendar-dated numeric observation, optionally carrying extra named
//! numeric columns, plus the [`FieldValue`] key type used when sorting by a
//! field chosen at runtime.
//!
//! Conventions
//! -----------
//! - `"date"` and `"value"` are the canonical field names for the timestamp
//!   and the primary value; any other name resolves against the extra
//!   columns.
//! - [`FieldValue`] values of different variants are incomparable; a single
//!   field name always yields one variant across a series, so mixed-variant
//!   comparisons never arise in named-field sorting.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Observation — one row of a dated price series.
///
/// Purpose
/// -------
/// Represent a single `(timestamp, value)` pair together with any extra
/// named numeric columns carried alongside it (e.g. volume or an unadjusted
/// close). Immutable once constructed.
///
/// Fields
/// ------
/// - `timestamp`: `NaiveDate`
///   Calendar date of the observation.
/// - `value`: `f64`
///   Primary numeric value (typically an adjusted closing price).
/// - `extra`: `BTreeMap<String, f64>`
///   Additional named numeric columns; may be empty.
///
/// Invariants
/// ----------
/// - No field is mutated after construction; all access goes through
///   read-only accessors.
/// - The extra-column map never shadows the canonical names: lookups for
///   `"date"` and `"value"` resolve to the dedicated fields first.
///
/// Notes
/// -----
/// - The type derives `Clone` and `PartialEq`; algorithms clone
///   observations into their results rather than borrowing from the input,
///   so outputs never alias caller-owned data.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    timestamp: NaiveDate,
    value: f64,
    extra: BTreeMap<String, f64>,
}

impl Observation {
    /// Construct an observation with no extra columns.
    pub fn new(timestamp: NaiveDate, value: f64) -> Self {
        Observation { timestamp, value, extra: BTreeMap::new() }
    }

    /// Construct an observation carrying extra named numeric columns.
    pub fn with_extra(timestamp: NaiveDate, value: f64, extra: BTreeMap<String, f64>) -> Self {
        Observation { timestamp, value, extra }
    }

    /// Calendar date of the observation.
    pub fn timestamp(&self) -> NaiveDate {
        self.timestamp
    }

    /// Primary numeric value of the observation.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Look up an extra column by name.
    pub fn extra(&self, name: &str) -> Option<f64> {
        self.extra.get(name).copied()
    }

    /// Resolve a named field into a sortable [`FieldValue`] key.
    ///
    /// Parameters
    /// ----------
    /// - `name`: `&str`
    ///   Field name. `"date"` resolves to the timestamp, `"value"` to the
    ///   primary value, and anything else to the extra column of that name.
    ///
    /// Returns
    /// -------
    /// `Option<FieldValue>`
    ///   `Some` when the name resolves on this record, `None` otherwise.
    ///   Callers that need an error for unresolved names (e.g. named-field
    ///   sorting) map the `None` case themselves.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "date" => Some(FieldValue::Date(self.timestamp)),
            "value" => Some(FieldValue::Number(self.value)),
            other => self.extra.get(other).copied().map(FieldValue::Number),
        }
    }
}

/// FieldValue — the value of one named field on one observation.
///
/// Purpose
/// -------
/// Serve as the comparison key for named-field sorting. Dates compare with
/// dates and numbers with numbers; a date never compares with a number, and
/// `NaN` never compares with anything, so the `PartialOrd` implementation
/// returns `None` in exactly those cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// The observation's timestamp.
    Date(NaiveDate),
    /// A numeric column (primary value or an extra column).
    Number(f64),
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Date(a), FieldValue::Date(b)) => a.partial_cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Canonical field resolution ("date", "value") and extra-column lookup.
    // - The `None` path for names that do not resolve.
    // - Ordering of `FieldValue` within a variant and incomparability across
    //   variants.
    //
    // They intentionally DO NOT cover:
    // - Sorting behavior built on these keys, which lives in the `sorting`
    //   subtree's own tests.
    // -------------------------------------------------------------------------

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    // Purpose
    // -------
    // Verify that the canonical names resolve to the timestamp and the
    // primary value.
    //
    // Given
    // -----
    // - An observation with a known date and value and no extra columns.
    //
    // Expect
    // ------
    // - `field("date")` yields `FieldValue::Date` with the timestamp.
    // - `field("value")` yields `FieldValue::Number` with the value.
    fn field_resolves_canonical_names() {
        // Arrange
        let obs = Observation::new(date(2024, 1, 15), 101.25);

        // Act & Assert
        assert_eq!(obs.field("date"), Some(FieldValue::Date(date(2024, 1, 15))));
        assert_eq!(obs.field("value"), Some(FieldValue::Number(101.25)));
    }

    #[test]
    // Purpose
    // -------
    // Verify that extra columns resolve by name and that unknown names
    // yield `None`.
    //
    // Given
    // -----
    // - An observation with one extra column "volume".
    //
    // Expect
    // ------
    // - `field("volume")` yields the column's value.
    // - `field("open")` yields `None`.
    fn field_resolves_extra_columns_and_rejects_unknown_names() {
        // Arrange
        let mut extra = BTreeMap::new();
        extra.insert("volume".to_string(), 1_500_000.0);
        let obs = Observation::with_extra(date(2024, 1, 15), 101.25, extra);

        // Act & Assert
        assert_eq!(obs.field("volume"), Some(FieldValue::Number(1_500_000.0)));
        assert_eq!(obs.field("open"), None);
    }

    #[test]
    // Purpose
    // -------
    // Verify the partial order on `FieldValue`: ordered within a variant,
    // incomparable across variants.
    //
    // Given
    // -----
    // - Two dates, two numbers, and one value of each variant.
    //
    // Expect
    // ------
    // - Dates and numbers order as their underlying types do.
    // - A date/number pair has no ordering.
    fn field_value_orders_within_variant_only() {
        // Arrange
        let d1 = FieldValue::Date(date(2024, 1, 1));
        let d2 = FieldValue::Date(date(2024, 6, 1));
        let n1 = FieldValue::Number(1.0);
        let n2 = FieldValue::Number(2.0);

        // Act & Assert
        assert_eq!(d1.partial_cmp(&d2), Some(Ordering::Less));
        assert_eq!(n2.partial_cmp(&n1), Some(Ordering::Greater));
        assert_eq!(d1.partial_cmp(&n1), None);
    }
}
