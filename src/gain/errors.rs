//! gain::errors — error types for the maximum-gain window search.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the gain-window component,
//! plus the Python exception bridge behind the `python-bindings` feature.
//!
//! Conventions
//! -----------
//! - Messages are phrased as domain constraints ("need at least 2 prices",
//!   "prices must be finite") and embed the offending length or value.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type GainResult<T> = Result<T, GainError>;

/// GainError — failure conditions for the maximum-gain window search.
///
/// Variants
/// --------
/// - `InsufficientData(len)`
///   The price series has fewer than 2 elements, so no day-over-day delta
///   can be formed.
/// - `InvalidData(value)`
///   A price is non-finite (NaN or ±∞) and cannot participate in delta
///   sums.
#[derive(Debug, Clone, PartialEq)]
pub enum GainError {
    InsufficientData(usize),
    InvalidData(f64),
}

impl std::error::Error for GainError {}

impl std::fmt::Display for GainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GainError::InsufficientData(len) => {
                write!(f, "Need at least 2 prices to form a delta series; got {len}.")
            }
            GainError::InvalidData(value) => {
                write!(f, "Invalid price value: {value}. Must be a finite number.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<GainError> for PyErr {
    fn from(err: GainError) -> PyErr {
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
    // - `Display` formatting and payload embedding for both GainError
    //   variants.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InsufficientData` embeds the offending length.
    //
    // Given
    // -----
    // - An `InsufficientData` with length 1.
    //
    // Expect
    // ------
    // - The message contains "1".
    fn insufficient_data_display_embeds_length() {
        // Arrange
        let err = GainError::InsufficientData(1);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('1'), "message should embed the offending length.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidData` embeds the offending value.
    //
    // Given
    // -----
    // - An `InvalidData` carrying infinity.
    //
    // Expect
    // ------
    // - The message contains "inf".
    fn invalid_data_display_embeds_value() {
        // Arrange
        let err = GainError::InvalidData(f64::INFINITY);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("inf"), "message should embed the offending value.\nGot: {msg}");
    }
}
