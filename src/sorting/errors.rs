//! sorting::errors — error types for stable sorting.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for named-field sorting, plus a
//! conversion layer to Python exceptions when the `python-bindings` feature
//! is enabled. Key-resolution failures are surfaced before any recursion
//! runs, so a sort either fails up front or completes.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("field must
//!   resolve on every record", "sort keys must be finite") and name the
//!   offending field and record index so callers can locate the bad row.
//! - The typed-selector API ([`crate::sorting::sort_by_key`]) is
//!   infallible and does not use these errors; only named-field lookup can
//!   fail.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (field name, record index, offending value).

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type SortResult<T> = Result<T, SortError>;

/// SortError — failure conditions for named-field sorting.
///
/// Variants
/// --------
/// - `FieldNotFound { field, index }`
///   The requested field does not resolve on the record at `index`.
/// - `NonFiniteKey { field, value }`
///   A resolved numeric key is NaN or ±∞ and therefore has no total order
///   with the other keys.
///
/// Invariants
/// ----------
/// - Each variant carries just the field name and the offending index or
///   value; no record data is captured.
#[derive(Debug, Clone, PartialEq)]
pub enum SortError {
    FieldNotFound { field: String, index: usize },
    NonFiniteKey { field: String, value: f64 },
}

impl std::error::Error for SortError {}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortError::FieldNotFound { field, index } => {
                write!(f, "Field {field:?} does not resolve on the record at index {index}.")
            }
            SortError::NonFiniteKey { field, value } => {
                write!(f, "Non-finite key {value} for field {field:?}. Sort keys must be finite.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SortError> for PyErr {
    fn from(err: SortError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for both SortError variants, including payload
    //   embedding (field name, index, offending value).
    //
    // They intentionally DO NOT cover:
    // - The `From<SortError> for PyErr` conversion, which requires linking
    //   against the Python C API and is exercised by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `FieldNotFound` names both the field and the record
    // index in its `Display` message.
    //
    // Given
    // -----
    // - A `FieldNotFound` for field "close" at index 7.
    //
    // Expect
    // ------
    // - The message contains "close" and "7".
    fn field_not_found_display_embeds_field_and_index() {
        // Arrange
        let err = SortError::FieldNotFound { field: "close".to_string(), index: 7 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("close"), "message should name the field.\nGot: {msg}");
        assert!(msg.contains('7'), "message should name the record index.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `NonFiniteKey` embeds the offending value in its
    // `Display` message.
    //
    // Given
    // -----
    // - A `NonFiniteKey` for field "value" with a NaN payload.
    //
    // Expect
    // ------
    // - The message contains "NaN" and the field name.
    fn non_finite_key_display_embeds_value() {
        // Arrange
        let err = SortError::NonFiniteKey { field: "value".to_string(), value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("NaN"), "message should show the offending value.\nGot: {msg}");
        assert!(msg.contains("value"), "message should name the field.\nGot: {msg}");
    }
}
