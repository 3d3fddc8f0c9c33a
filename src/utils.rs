//! utils — PyO3 conversion helpers for the binding surface.
//!
//! Everything here is compiled only with the `python-bindings` feature and
//! exists to turn Python-side inputs (numpy arrays, pandas Series, float
//! sequences, ISO date strings) into the crate's core types. No algorithmic
//! work happens in this module.

use chrono::NaiveDate;
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

use crate::series::Observation;

/// Extract a contiguous 1-D `f64` view from a Python object.
///
/// Accepts, in order of preference: a numpy array, anything exposing
/// `to_numpy` (pandas Series), or a plain sequence of floats (copied).
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Parse an ISO-8601 (`YYYY-MM-DD`) date string.
#[inline]
pub fn parse_iso_date(raw: &str) -> PyResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        PyValueError::new_err(format!("invalid date {raw:?} (expected ISO-8601 'YYYY-MM-DD')"))
    })
}

/// Format a date back into its ISO-8601 string form for Python callers.
#[inline]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Assemble an observation series from parallel date and value columns.
///
/// Fails when the columns differ in length or any date fails to parse;
/// value validity (finiteness) is left to the core components so that the
/// error surface matches native Rust usage.
pub fn build_series<'py>(
    py: Python<'py>, dates: &[String], values: &Bound<'py, PyAny>,
) -> PyResult<Vec<Observation>> {
    let arr = extract_f64_array(py, values)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("values must be a 1-D contiguous float64 array or sequence")
    })?;

    if dates.len() != slice.len() {
        return Err(PyValueError::new_err(format!(
            "dates and values must have equal length (got {} dates, {} values)",
            dates.len(),
            slice.len()
        )));
    }

    dates
        .iter()
        .zip(slice)
        .map(|(raw, &value)| Ok(Observation::new(parse_iso_date(raw)?, value)))
        .collect()
}
