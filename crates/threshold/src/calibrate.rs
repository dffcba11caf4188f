//! Percentile threshold calibration over a reference period.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use etccdi_calendar::{Doy, NON_LEAP_YEAR_LEN, date_range, pad_range, year_bounds};
use etccdi_stats::{centered_rolling_mean, present_fraction, quantile_present};
use tracing::debug;

use crate::config::CalibrationConfig;
use crate::error::ThresholdError;
use crate::profile::ThresholdProfile;

/// Checks the dated input and indexes it by date.
fn index_observations(
    dates: &[NaiveDate],
    values: &[Option<f64>],
) -> Result<HashMap<NaiveDate, Option<f64>>, ThresholdError> {
    if dates.len() != values.len() {
        return Err(ThresholdError::LengthMismatch {
            dates_len: dates.len(),
            values_len: values.len(),
        });
    }
    let mut by_date = HashMap::with_capacity(dates.len());
    for (&date, &value) in dates.iter().zip(values.iter()) {
        if value.is_some_and(|v| !v.is_finite()) {
            return Err(ThresholdError::NonFiniteValue { date });
        }
        if by_date.insert(date, value).is_some() {
            return Err(ThresholdError::DuplicateDate { date });
        }
    }
    Ok(by_date)
}

/// Builds a 365-entry day-of-year percentile threshold profile.
///
/// # Algorithm
///
/// 1. Span the reference period from Jan 1 of its first year to Dec 31 of
///    its last, labelling every date with its leap-folded [`Doy`].
/// 2. Pad the span by `window / 2` days on each side and left-join the
///    observations onto it; dates without an observation are missing.
/// 3. Smooth with a centered rolling mean of width `window`. A smoothed value
///    is missing if any value in its window is.
/// 4. For each day of year, collect the smoothed values of the 30 reference
///    years (label 59 also receives every Feb 29). If the present fraction is
///    below `min_fraction` the threshold is missing, otherwise it is the
///    type-7 quantile of the present values.
///
/// # Arguments
///
/// * `dates` - Observation dates, in any order, without duplicates. Dates
///   outside the padded reference period are ignored.
/// * `values` - Observation for each date; `None` is missing.
/// * `config` - Percentile, reference period, window and minimum fraction.
///
/// # Errors
///
/// Returns [`ThresholdError`] if the configuration is invalid, the slices
/// differ in length, a date repeats, or a present value is not finite.
#[tracing::instrument(skip(dates, values, config), fields(
    n_obs = dates.len(),
    start = config.reference_period().start(),
    end = config.reference_period().end()
))]
pub fn calibrate(
    dates: &[NaiveDate],
    values: &[Option<f64>],
    config: &CalibrationConfig,
) -> Result<ThresholdProfile, ThresholdError> {
    config.validate()?;
    let by_date = index_observations(dates, values)?;

    let period = config.reference_period();
    let n_in_period = dates.iter().filter(|d| period.contains(d.year())).count();
    debug!(n_in_period, "observations inside the reference period");
    let (start, end) = year_bounds(period.start(), period.end())?;
    let half = config.window() / 2;
    let (padded_start, padded_end) = pad_range(start, end, half as u64)?;
    let padded = date_range(padded_start, padded_end)?;
    let n_reference = padded.len() - 2 * half;

    let joined: Vec<Option<f64>> = padded
        .iter()
        .map(|date| by_date.get(date).copied().flatten())
        .collect();
    let smoothed = centered_rolling_mean(&joined, config.window());

    let mut buckets: Vec<Vec<Option<f64>>> = vec![Vec::new(); NON_LEAP_YEAR_LEN];
    for (&date, &value) in padded.iter().zip(smoothed.iter()).skip(half).take(n_reference) {
        buckets[Doy::from_date(date).index()].push(value);
    }

    let thresholds: Vec<Option<f64>> = buckets
        .iter()
        .map(|bucket| {
            if present_fraction(bucket) < config.min_fraction() {
                None
            } else {
                quantile_present(bucket, config.percentile())
            }
        })
        .collect();

    let first_missing = thresholds
        .iter()
        .position(Option::is_none)
        .and_then(|i| Doy::new(i as u16 + 1).ok());
    if let Some(doy) = first_missing {
        let n_missing = thresholds.iter().filter(|t| t.is_none()).count();
        let (month, day) = doy.month_day();
        debug!(
            n_missing,
            first_month = month,
            first_day = day,
            "days of year without sufficient reference data"
        );
    }

    ThresholdProfile::from_values(thresholds)
}
