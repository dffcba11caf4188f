//! Splitting dated records into calendar years and computing per-year indices.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use etccdi_threshold::ThresholdProfile;
use tracing::debug;

use crate::catalog::ClimateIndex;
use crate::error::IndexError;
use crate::series::DailySeries;

/// Groups a dated daily record into one [`DailySeries`] per calendar year.
///
/// Dates must be strictly increasing. Gaps are not filled, so a year with a
/// missing date yields a short series that the indices gate out.
///
/// # Errors
///
/// Returns [`IndexError::LengthMismatch`] if the slices differ in length,
/// [`IndexError::UnorderedDates`] if the dates are not strictly increasing,
/// and [`IndexError::NonFiniteValue`] for a NaN or infinite value.
pub fn split_by_year(
    dates: &[NaiveDate],
    values: &[Option<f64>],
) -> Result<BTreeMap<i32, DailySeries>, IndexError> {
    if dates.len() != values.len() {
        return Err(IndexError::LengthMismatch {
            dates_len: dates.len(),
            values_len: values.len(),
        });
    }
    if let Some(i) = dates.windows(2).position(|w| w[1] <= w[0]) {
        return Err(IndexError::UnorderedDates { index: i + 1 });
    }
    if let Some(index) = values
        .iter()
        .position(|v| v.is_some_and(|x| !x.is_finite()))
    {
        return Err(IndexError::NonFiniteValue { index });
    }

    let mut years: BTreeMap<i32, Vec<Option<f64>>> = BTreeMap::new();
    for (date, &value) in dates.iter().zip(values.iter()) {
        years.entry(date.year()).or_default().push(value);
    }
    years
        .into_iter()
        .map(|(year, values)| Ok((year, DailySeries::new(values)?)))
        .collect()
}

/// Computes one index for every year of a dated record.
///
/// Years whose series is not a full calendar year map to `None`.
///
/// # Errors
///
/// Returns [`IndexError`] if the record cannot be split by year or the
/// index needs a threshold profile that is not given.
#[tracing::instrument(skip(dates, values, thresholds), fields(n_days = dates.len()))]
pub fn annual_index(
    index: ClimateIndex,
    dates: &[NaiveDate],
    values: &[Option<f64>],
    thresholds: Option<&ThresholdProfile>,
) -> Result<BTreeMap<i32, Option<f64>>, IndexError> {
    if index.needs_threshold() && thresholds.is_none() {
        return Err(IndexError::MissingThresholdProfile { code: index.code() });
    }
    let years = split_by_year(dates, values)?;
    let mut out = BTreeMap::new();
    for (year, series) in &years {
        if !series.is_full_year() {
            debug!(year, n_days = series.len(), "incomplete year");
        }
        out.insert(*year, index.compute(series, thresholds)?);
    }
    Ok(out)
}
