//! sorting::merge — stable top-down merge sort.
//!
//! Purpose
//! -------
//! Implement the crate's stable sorting component: a classic top-down merge
//! sort, generic over the record type and a caller-supplied key selector,
//! plus a named-field entry point for [`Observation`] series.
//!
//! Key behaviors
//! -------------
//! - Split at the midpoint, sort each half recursively, and merge by
//!   repeatedly taking the smaller-or-equal front element. The merge emits
//!   the *left* element whenever its key is not greater than the right
//!   one — this `<=` comparison is what makes the sort stable.
//! - Extract and validate all keys once, before the recursion, so that a
//!   named-field sort either fails up front ([`SortError`]) or completes.
//!
//! Invariants & assumptions
//! ------------------------
//! - The output is a permutation of the input: no record is dropped or
//!   duplicated.
//! - Records with equal keys keep their input relative order.
//! - Sequences of length ≤ 1 are already sorted (base case); an empty
//!   input yields an empty output, not an error.
//! - O(n log n) comparisons, O(n) auxiliary space per merge level.
//!
//! Conventions
//! -----------
//! - The typed API [`sort_by_key`] takes an infallible selector and any
//!   `PartialOrd` key; keys that compare as incomparable (only possible
//!   outside the named-field path) are treated as ties, keeping input
//!   order.
//! - The named-field API [`sort_by_field`] resolves keys through
//!   [`Observation::field`] and rejects unresolved fields and non-finite
//!   numeric keys before sorting.
//!
//! Downstream usage
//! ----------------
//! - Callers with a concrete key in mind use the typed selector:
//!
//!   ```rust
//!   use stock_analytics::sorting::sort_by_key;
//!
//!   let sorted = sort_by_key(&[3_i64, 1, 2], |v| *v);
//!   assert_eq!(sorted, vec![1, 2, 3]);
//!   ```
//!
//! - Callers sorting a series by a column chosen at runtime use
//!   [`sort_by_field`] and handle [`SortError`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover the stability contract (equal keys keep input
//!   order), idempotence on already-sorted input, the empty-input case,
//!   and both error branches of [`sort_by_field`].
//! - Property tests in `tests/analysis_props.rs` compare [`sort_by_key`]
//!   against the standard library's stable `sort_by` on random inputs.

use std::cmp::Ordering;

use crate::series::{FieldValue, Observation};
use crate::sorting::errors::{SortError, SortResult};

/// Stable-sort a sequence of records by a typed key selector.
///
/// Parameters
/// ----------
/// - `records`: `&[R]`
///   Input sequence in caller-supplied order. The input is not modified;
///   the result is a newly constructed sequence.
/// - `selector`: `F: Fn(&R) -> K`
///   Capability that extracts the sort key from a record. `K` only needs
///   `PartialOrd`; incomparable key pairs are treated as ties.
///
/// Returns
/// -------
/// `Vec<R>`
///   A permutation of `records`, non-decreasing in the selected key, with
///   the input relative order preserved among records whose keys compare
///   equal (stability).
///
/// Notes
/// -----
/// - Keys are extracted exactly once per record, then carried through the
///   merge levels alongside their records.
pub fn sort_by_key<R, K, F>(records: &[R], selector: F) -> Vec<R>
where
    R: Clone,
    K: PartialOrd,
    F: Fn(&R) -> K,
{
    let keyed: Vec<(K, R)> =
        records.iter().map(|record| (selector(record), record.clone())).collect();
    merge_sort(keyed).into_iter().map(|(_, record)| record).collect()
}

/// Stable-sort an observation series by a field chosen at runtime.
///
/// Parameters
/// ----------
/// - `records`: `&[Observation]`
///   Input series in caller-supplied order.
/// - `field`: `&str`
///   Field name resolved per record via [`Observation::field`]: `"date"`,
///   `"value"`, or the name of an extra column.
///
/// Returns
/// -------
/// `SortResult<Vec<Observation>>`
///   - `Ok(sorted)` — a stable permutation of `records`, non-decreasing in
///     the resolved field.
///   - `Err(SortError)` — when key extraction fails; the input is not
///     partially sorted in that case.
///
/// Errors
/// ------
/// - `SortError::FieldNotFound { field, index }`
///   Returned when `field` does not resolve on the record at `index`.
/// - `SortError::NonFiniteKey { field, value }`
///   Returned when a resolved numeric key is NaN or ±∞.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via [`SortError`].
///
/// Examples
/// --------
/// ```rust
/// use chrono::NaiveDate;
/// use stock_analytics::series::Observation;
/// use stock_analytics::sorting::sort_by_field;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let series = vec![
///     Observation::new(d(3), 102.0),
///     Observation::new(d(1), 100.0),
///     Observation::new(d(2), 101.0),
/// ];
///
/// let by_date = sort_by_field(&series, "date").unwrap();
/// assert_eq!(by_date[0].timestamp(), d(1));
/// assert_eq!(by_date[2].timestamp(), d(3));
/// ```
pub fn sort_by_field(records: &[Observation], field: &str) -> SortResult<Vec<Observation>> {
    let mut keyed: Vec<(FieldValue, Observation)> = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let key = record
            .field(field)
            .ok_or_else(|| SortError::FieldNotFound { field: field.to_string(), index })?;
        if let FieldValue::Number(value) = key {
            if !value.is_finite() {
                return Err(SortError::NonFiniteKey { field: field.to_string(), value });
            }
        }
        keyed.push((key, record.clone()));
    }
    Ok(merge_sort(keyed).into_iter().map(|(_, record)| record).collect())
}

/// Recursively sort keyed records by splitting at the midpoint.
///
/// Parameters
/// ----------
/// - `items`: `Vec<(K, T)>`
///   Keyed records in their current order; ownership is taken so halves
///   can be moved into the recursion without cloning.
///
/// Returns
/// -------
/// `Vec<(K, T)>`
///   The same records, stably ordered by key.
///
/// Notes
/// -----
/// - Length ≤ 1 is the base case. The left half is `[0, len / 2)`, the
///   right half the remainder, matching the merge's left-preference so
///   that stability holds at every level.
fn merge_sort<K: PartialOrd, T>(mut items: Vec<(K, T)>) -> Vec<(K, T)> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items);
    let right = merge_sort(right);
    merge(left, right)
}

/// Merge two key-sorted runs, preferring the left run on equal keys.
///
/// Parameters
/// ----------
/// - `left`, `right`: `Vec<(K, T)>`
///   Runs already sorted by key; every element of `left` preceded every
///   element of `right` in the original input.
///
/// Returns
/// -------
/// `Vec<(K, T)>`
///   The merged run. The left element is emitted whenever its key is not
///   greater than the right one (`<=`), which preserves input order among
///   equal keys. Incomparable key pairs take the same branch, so they too
///   keep input order.
fn merge<K: PartialOrd, T>(left: Vec<(K, T)>, right: Vec<(K, T)>) -> Vec<(K, T)> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left_iter = left.into_iter();
    let mut right_iter = right.into_iter();
    let mut left_front = left_iter.next();
    let mut right_front = right_iter.next();

    loop {
        match (left_front.take(), right_front.take()) {
            (Some(l), Some(r)) => {
                if l.0.partial_cmp(&r.0) != Some(Ordering::Greater) {
                    merged.push(l);
                    right_front = Some(r);
                    left_front = left_iter.next();
                } else {
                    merged.push(r);
                    left_front = Some(l);
                    right_front = right_iter.next();
                }
            }
            (Some(l), None) => {
                merged.push(l);
                merged.extend(left_iter);
                break;
            }
            (None, Some(r)) => {
                merged.push(r);
                merged.extend(right_iter);
                break;
            }
            (None, None) => break,
        }
    }

    merged
}
