//! Generic reductions over a condition series: counts and longest runs.

use etccdi_rle::encode_iter;

use crate::comparison::Comparison;
use crate::error::IndexError;
use crate::series::DailySeries;

fn check_threshold(threshold: f64) -> Result<(), IndexError> {
    if threshold.is_finite() {
        Ok(())
    } else {
        Err(IndexError::NonFiniteThreshold { value: threshold })
    }
}

/// Number of days satisfying `value <cmp> threshold`.
///
/// Returns `Ok(None)` when the series is not a full year.
///
/// # Errors
///
/// Returns [`IndexError::NonFiniteThreshold`] for a NaN or infinite
/// threshold.
pub fn count_where(
    series: &DailySeries,
    cmp: Comparison,
    threshold: f64,
) -> Result<Option<usize>, IndexError> {
    check_threshold(threshold)?;
    Ok(count_fixed(series, cmp, threshold))
}

/// Length of the longest run of consecutive days satisfying
/// `value <cmp> threshold`, 0 when no day does.
///
/// Returns `Ok(None)` when the series is not a full year.
///
/// # Errors
///
/// Returns [`IndexError::NonFiniteThreshold`] for a NaN or infinite
/// threshold.
pub fn longest_run_where(
    series: &DailySeries,
    cmp: Comparison,
    threshold: f64,
) -> Result<Option<usize>, IndexError> {
    check_threshold(threshold)?;
    Ok(longest_run_fixed(series, cmp, threshold))
}

/// [`count_where`] for thresholds known to be finite.
pub(crate) fn count_fixed(series: &DailySeries, cmp: Comparison, threshold: f64) -> Option<usize> {
    if !series.is_full_year() {
        return None;
    }
    Some(
        series
            .values()
            .iter()
            .filter(|&&v| cmp.holds(v, Some(threshold)))
            .count(),
    )
}

/// [`longest_run_where`] for thresholds known to be finite.
pub(crate) fn longest_run_fixed(
    series: &DailySeries,
    cmp: Comparison,
    threshold: f64,
) -> Option<usize> {
    if !series.is_full_year() {
        return None;
    }
    let rle = encode_iter(
        series
            .values()
            .iter()
            .map(|&v| cmp.holds(v, Some(threshold))),
    );
    Some(rle.longest_run_of(&true))
}
