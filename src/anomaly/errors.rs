//! anomaly::errors — error types for the anomaly scan.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the windowed pairwise
//! anomaly scan, plus the Python exception bridge behind the
//! `python-bindings` feature.
//!
//! Conventions
//! -----------
//! - A non-positive threshold is *not* an error (it degenerates to
//!   flagging every distinct-day pair); only a NaN threshold is rejected,
//!   since a NaN comparison can never strictly exceed anything.
//! - A zero-day window is permitted (the boundary strip is simply empty);
//!   only negative windows are rejected.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type AnomalyResult<T> = Result<T, AnomalyError>;

/// AnomalyError — failure conditions for the anomaly scan.
///
/// Variants
/// --------
/// - `InvalidThreshold(t)`
///   The rate threshold is NaN, so no rate could ever compare against it.
/// - `InvalidWindow(days)`
///   The boundary-strip window is negative.
/// - `InvalidData(value)`
///   An observation value is non-finite (NaN or ±∞) and cannot produce a
///   meaningful rate.
#[derive(Debug, Clone, PartialEq)]
pub enum AnomalyError {
    InvalidThreshold(f64),
    InvalidWindow(i64),
    InvalidData(f64),
}

impl std::error::Error for AnomalyError {}

impl std::fmt::Display for AnomalyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnomalyError::InvalidThreshold(t) => {
                write!(f, "Invalid threshold: {t}. Must be a number (NaN is not comparable).")
            }
            AnomalyError::InvalidWindow(days) => {
                write!(f, "Invalid strip window: {days} days. Must be non-negative.")
            }
            AnomalyError::InvalidData(value) => {
                write!(f, "Invalid observation value: {value}. Must be a finite number.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<AnomalyError> for PyErr {
    fn from(err: AnomalyError) -> PyErr {
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
    // - `Display` formatting and payload embedding for each AnomalyError
    //   variant.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidThreshold` shows the NaN payload.
    //
    // Given
    // -----
    // - An `InvalidThreshold` carrying NaN.
    //
    // Expect
    // ------
    // - The message contains "NaN".
    fn invalid_threshold_display_embeds_payload() {
        // Arrange
        let err = AnomalyError::InvalidThreshold(f64::NAN);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("NaN"), "message should show the offending threshold.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidWindow` embeds the offending day count.
    //
    // Given
    // -----
    // - An `InvalidWindow` with -3 days.
    //
    // Expect
    // ------
    // - The message contains "-3".
    fn invalid_window_display_embeds_days() {
        // Arrange
        let err = AnomalyError::InvalidWindow(-3);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-3"), "message should embed the offending window.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidData` embeds the offending value.
    //
    // Given
    // -----
    // - An `InvalidData` carrying negative infinity.
    //
    // Expect
    // ------
    // - The message contains "-inf".
    fn invalid_data_display_embeds_value() {
        // Arrange
        let err = AnomalyError::InvalidData(f64::NEG_INFINITY);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-inf"), "message should embed the offending value.\nGot: {msg}");
    }
}
