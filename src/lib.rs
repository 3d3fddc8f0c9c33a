//! stock_analytics — divide-and-conquer analytics for dated price series.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the core routines to Python via the `_stock_analytics` extension
//! module. The crate implements three independent, pure, single-threaded
//! components over an in-memory series of dated observations:
//!
//! - stable merge sort by an arbitrary field (`sorting`),
//! - maximum cumulative gain / least loss window search (`gain`),
//! - windowed pairwise rate-of-change anomaly scan (`anomaly`).
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`series`, `sorting`, `gain`,
//!   `anomaly`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_stock_analytics` Python extension when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - All algorithmic work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - The components share no mutable state and call neither each other nor
//!   any I/O: ingestion (file reading, date parsing, source merging) and
//!   visualization are external collaborators. The crate consumes
//!   already-parsed ordered sequences and produces plain data (sorted
//!   sequences, index ranges, anomaly lists).
//! - Series handed to the gain and anomaly components are non-decreasing
//!   in timestamp (caller's invariant); only the sorting component sorts.
//!
//! Conventions
//! -----------
//! - Errors from core code are rich enum types internally and are
//!   converted to `PyValueError` at the PyO3 boundary.
//! - Dates cross the Python boundary as ISO-8601 (`YYYY-MM-DD`) strings;
//!   numeric series cross as numpy arrays, pandas Series, or float
//!   sequences.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_stock_analytics` and wraps its
//!   classes in user-facing APIs.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules, an
//!   end-to-end pipeline test, and property tests under `tests/`.
//! - The PyO3 surface is exercised by Python-level smoke tests in the
//!   packaging layer, not from Rust.

pub mod anomaly;
pub mod gain;
pub mod series;
pub mod sorting;

#[cfg(feature = "python-bindings")]
mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    anomaly::{find_anomalies, AnomalyRecord},
    gain::GainOutcome,
    series::Observation,
    sorting::sort_by_field,
    utils::{build_series, extract_f64_array, iso_date},
};

/// SortedSeries — Python-facing stable sort of a dated series.
///
/// Purpose
/// -------
/// Sort a `(date, value)` series by a named field (`"date"` or `"value"`)
/// using the crate's stable merge sort, and expose the reordered columns
/// to Python.
///
/// Parameters
/// ----------
/// Constructed from Python via `SortedSeries(dates, values, field)`:
/// - `dates`: sequence of ISO-8601 date strings, one per observation.
/// - `values`: one-dimensional array-like of `f64`, same length as
///   `dates`.
/// - `field`: field name to sort by (`"date"` or `"value"`).
///
/// Fields
/// ------
/// - `inner`: `Vec<Observation>`
///   The sorted series; the accessors reproject it into columns.
///
/// Invariants
/// ----------
/// - `inner` is a stable permutation of the constructed input: equal keys
///   keep input order, and no record is dropped or duplicated.
///
/// Notes
/// -----
/// - Native Rust callers should use [`sorting::sort_by_field`] directly;
///   this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "stock_analytics")]
pub struct SortedSeries {
    /// The sorted observation series.
    inner: Vec<Observation>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SortedSeries {
    #[new]
    #[pyo3(
        signature = (dates, values, field = "date"),
        text_signature = "(dates, values, /, field='date')"
    )]
    pub fn new<'py>(
        py: Python<'py>, dates: Vec<String>, values: &Bound<'py, PyAny>, field: &str,
    ) -> PyResult<Self> {
        let series = build_series(py, &dates, values)?;
        let inner = sort_by_field(&series, field)?;
        Ok(SortedSeries { inner })
    }

    /// The sorted dates, as ISO-8601 strings.
    #[getter]
    pub fn dates(&self) -> Vec<String> {
        self.inner.iter().map(|obs| iso_date(obs.timestamp())).collect()
    }

    /// The sorted primary values.
    #[getter]
    pub fn values(&self) -> Vec<f64> {
        self.inner.iter().map(Observation::value).collect()
    }
}

/// MaxGainWindow — Python-facing maximum-gain window search.
///
/// Purpose
/// -------
/// Run the divide-and-conquer maximum-subarray search over the
/// day-over-day deltas of a price series and expose the winning sum and
/// inclusive price-index range as Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via `MaxGainWindow(prices)`:
/// - `prices`: one-dimensional array-like of `f64` with length ≥ 2 and no
///   NaNs/infinities.
///
/// Fields
/// ------
/// - `inner`: [`GainOutcome`]
///   Rust-side outcome holding the winning sum and range.
///
/// Notes
/// -----
/// - Native Rust callers should use [`GainOutcome::max_gain_window`]
///   directly; this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "stock_analytics")]
pub struct MaxGainWindow {
    /// The gain-window search outcome.
    inner: GainOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MaxGainWindow {
    #[new]
    #[pyo3(text_signature = "(prices, /)")]
    pub fn new<'py>(py: Python<'py>, prices: &Bound<'py, PyAny>) -> PyResult<Self> {
        let arr = extract_f64_array(py, prices)?;
        let slice = arr.as_slice().map_err(|_| {
            pyo3::exceptions::PyValueError::new_err(
                "prices must be a 1-D contiguous float64 array or sequence",
            )
        })?;
        let inner = GainOutcome::max_gain_window(slice)?;
        Ok(MaxGainWindow { inner })
    }

    /// Cumulative change over the winning range.
    #[getter]
    pub fn total_change(&self) -> f64 {
        self.inner.total_change()
    }

    /// First price index of the winning range.
    #[getter]
    pub fn start(&self) -> usize {
        self.inner.range().start
    }

    /// Last price index of the winning range (inclusive).
    #[getter]
    pub fn end(&self) -> usize {
        self.inner.range().end
    }
}

/// AnomalyScan — Python-facing rate-of-change anomaly scan.
///
/// Purpose
/// -------
/// Run the windowed pairwise anomaly scan over a dated series and expose
/// the deduplicated flagged pairs to Python as plain tuples.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `AnomalyScan(dates, values, threshold, window_days=10)`:
/// - `dates`: sequence of ISO-8601 date strings, ascending.
/// - `values`: one-dimensional array-like of `f64`, same length as
///   `dates`.
/// - `threshold`: rate-per-day threshold (strict `>`); NaN is rejected.
/// - `window_days`: boundary-strip half-width in whole days.
///
/// Fields
/// ------
/// - `records`: `Vec<AnomalyRecord>`
///   Deduplicated scan output in first-encounter order.
///
/// Notes
/// -----
/// - Native Rust callers should use [`anomaly::find_anomalies`] directly;
///   this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "stock_analytics")]
pub struct AnomalyScan {
    /// The deduplicated anomaly records.
    records: Vec<AnomalyRecord>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl AnomalyScan {
    #[new]
    #[pyo3(
        signature = (dates, values, threshold, window_days = 10),
        text_signature = "(dates, values, threshold, /, window_days=10)"
    )]
    pub fn new<'py>(
        py: Python<'py>, dates: Vec<String>, values: &Bound<'py, PyAny>, threshold: f64,
        window_days: i64,
    ) -> PyResult<Self> {
        let series = build_series(py, &dates, values)?;
        let records = find_anomalies(&series, threshold, window_days)?;
        Ok(AnomalyScan { records })
    }

    /// Flagged pairs as `(first_date, first_value, second_date,
    /// second_value, rate_per_day)` tuples.
    #[getter]
    pub fn records(&self) -> Vec<(String, f64, String, f64, f64)> {
        self.records
            .iter()
            .map(|record| {
                (
                    iso_date(record.first().timestamp()),
                    record.first().value(),
                    iso_date(record.second().timestamp()),
                    record.second().value(),
                    record.rate_per_day(),
                )
            })
            .collect()
    }

    /// Number of flagged pairs.
    #[getter]
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// _stock_analytics — PyO3 module initializer for the Python extension.
///
/// Registers the three analysis classes on the `_stock_analytics` module;
/// the pure-Python packaging layer wraps them under user-facing names.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _stock_analytics<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<SortedSeries>()?;
    m.add_class::<MaxGainWindow>()?;
    m.add_class::<AnomalyScan>()?;
    Ok(())
}
