//! Integration tests for the full analysis pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end flow an orchestrating caller would run: take
//!   a merged but unordered dated series, sort it by date, search the
//!   sorted prices for the maximum-gain window, and scan the same series
//!   for rate-of-change anomalies.
//! - Exercise realistic shapes (a drift with one embedded spike/dip pair)
//!   rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `sorting`: `sort_by_field` by date and by value, including
//!   idempotence on the already-sorted result.
//! - `gain`: `GainOutcome::max_gain_window` on the sorted prices,
//!   including the telescoping identity and range bounds.
//! - `anomaly`: `find_anomalies` on the sorted series, including the
//!   presence of the embedded spike pair and dedup uniqueness.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of error branches and tie-breaking — covered
//!   by unit tests in the component modules.
//! - Python bindings — exercised by Python-level tests in the packaging
//!   layer.
//! - Randomized oracle comparisons — covered by the property-test suite.

use std::collections::HashSet;

use chrono::NaiveDate;
use stock_analytics::anomaly::find_anomalies;
use stock_analytics::gain::GainOutcome;
use stock_analytics::series::Observation;
use stock_analytics::sorting::sort_by_field;

/// Purpose
/// -------
/// Build the shared fixture series: fifteen daily closes drifting upward
/// by about 1 per day, with one violent dip-and-recovery (days 8 and 9)
/// that the anomaly scan should flag, delivered in shuffled order the way
/// a multi-source merge would hand it over.
///
/// Returns
/// -------
/// - The series in a fixed non-chronological order; values are exactly
///   representable so assertions can use equality.
fn merged_unordered_series() -> Vec<Observation> {
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 3, d).expect("valid fixture date");
    let rows: Vec<(u32, f64)> = vec![
        (5, 104.0),
        (1, 100.0),
        (9, 60.0), // dip bottom
        (3, 102.0),
        (8, 107.0),
        (2, 101.0),
        (10, 109.0), // recovery
        (7, 106.0),
        (4, 103.0),
        (13, 112.0),
        (6, 105.0),
        (12, 111.0),
        (15, 114.0),
        (11, 110.0),
        (14, 113.0),
    ];
    rows.into_iter().map(|(d, value)| Observation::new(day(d), value)).collect()
}

#[test]
// Purpose
// -------
// Run the whole pipeline: sort by date, then find the maximum-gain
// window over the sorted prices.
//
// Given
// -----
// - The shuffled fixture series.
//
// Expect
// ------
// - Sorting yields strictly ascending dates and is idempotent.
// - The winning window is the recovery from the day-9 bottom (value 60)
//   to the final close (114), for a total change of 54.
fn pipeline_sort_then_gain_window() {
    // Arrange
    let merged = merged_unordered_series();

    // Act
    let sorted = sort_by_field(&merged, "date").expect("date resolves on every record");
    let resorted = sort_by_field(&sorted, "date").expect("date resolves on every record");
    let prices: Vec<f64> = sorted.iter().map(Observation::value).collect();
    let outcome = GainOutcome::max_gain_window(&prices).expect("series is long enough");

    // Assert
    assert_eq!(sorted.len(), merged.len(), "sorting must not drop or duplicate records");
    assert!(
        sorted.windows(2).all(|w| w[0].timestamp() < w[1].timestamp()),
        "fixture dates are distinct, so sorted order must be strictly ascending"
    );
    assert_eq!(resorted, sorted, "sorting a sorted series must be a no-op");

    let range = outcome.range();
    assert_eq!(prices[range.start], 60.0, "the window should open at the dip bottom");
    assert_eq!(prices[range.end], 114.0, "the window should close at the final price");
    assert_eq!(outcome.total_change(), 54.0);
    assert_eq!(outcome.total_change(), prices[range.end] - prices[range.start]);
}

#[test]
// Purpose
// -------
// Run the anomaly leg of the pipeline on the sorted fixture and check
// that the embedded dip is flagged while the background drift is not.
//
// Given
// -----
// - The fixture sorted by date; threshold 10.0 per day; a 10-day strip
//   window.
//
// Expect
// ------
// - The day-8 → day-9 dip (47/day) and day-9 → day-10 recovery (49/day)
//   are both flagged; the ±1/day drift never is.
// - No unordered pair is reported twice.
fn pipeline_anomaly_scan_flags_embedded_dip() {
    // Arrange
    let sorted =
        sort_by_field(&merged_unordered_series(), "date").expect("date resolves on every record");
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 3, d).expect("valid fixture date");

    // Act
    let anomalies = find_anomalies(&sorted, 10.0, 10).expect("valid scan parameters");

    // Assert
    let keys: HashSet<(NaiveDate, NaiveDate)> = anomalies
        .iter()
        .map(|r| (r.first().timestamp(), r.second().timestamp()))
        .collect();
    assert!(keys.contains(&(day(8), day(9))), "the dip itself must be flagged");
    assert!(keys.contains(&(day(9), day(10))), "the recovery must be flagged");
    assert_eq!(keys.len(), anomalies.len(), "no unordered pair may be reported twice");
    for record in &anomalies {
        assert!(record.rate_per_day() > 10.0, "every reported rate must exceed the threshold");
        assert!(
            record.first().timestamp() == day(9) || record.second().timestamp() == day(9),
            "only pairs touching the dip bottom can move faster than 10/day"
        );
    }
}

#[test]
// Purpose
// -------
// Check the value-sorted view of the pipeline: sorting by the "value"
// field surfaces the dip bottom first without disturbing the record
// contents.
//
// Given
// -----
// - The shuffled fixture series.
//
// Expect
// ------
// - The first record after sorting by value is the day-9 bottom; values
//   are non-decreasing throughout.
fn pipeline_sort_by_value_surfaces_dip_bottom() {
    // Arrange
    let merged = merged_unordered_series();

    // Act
    let by_value = sort_by_field(&merged, "value").expect("value resolves on every record");

    // Assert
    assert_eq!(by_value[0].value(), 60.0);
    assert!(
        by_value.windows(2).all(|w| w[0].value() <= w[1].value()),
        "values must be non-decreasing after sorting by value"
    );
}
