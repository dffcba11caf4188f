//! Spell-based persistence indices: cold nights and growing-season length.

use etccdi_calendar::july_first_index;
use etccdi_rle::{encode, encode_iter};
use etccdi_threshold::ThresholdProfile;
use tracing::debug;

use crate::comparison::Comparison;
use crate::series::DailySeries;

/// Minimum spell length, in days, for both persistence indices.
pub const MIN_SPELL_LENGTH: usize = 6;
/// Growing-season temperature threshold on tmean, °C.
pub const GROWING_SEASON_THRESHOLD: f64 = 5.0;

/// CN: persistence of nights colder than the calibrated day-of-year threshold.
///
/// Compares each day against the profile (expanded across Feb 29 for a leap
/// year) and run-length encodes the result. The index is the sum of the
/// 0-based run numbers (positions in the run list, not day positions) of the
/// cold runs lasting at least [`MIN_SPELL_LENGTH`] nights. A missing value or
/// missing threshold never counts as cold.
///
/// Returns `None` when the series is not a full year or the sum is 0, which
/// covers both no qualifying run and a single one that opens the year.
pub fn cold_nights(tmin: &DailySeries, thresholds: &ThresholdProfile) -> Option<usize> {
    if !tmin.is_full_year() {
        return None;
    }
    let aligned = thresholds.aligned_to(tmin.len());
    let rle = encode_iter(
        tmin.values()
            .iter()
            .zip(aligned.iter())
            .map(|(&v, &t)| Comparison::Lt.holds(v, t)),
    );

    let run_sum: usize = rle
        .runs()
        .enumerate()
        .filter(|(_, run)| *run.value && run.length >= MIN_SPELL_LENGTH)
        .map(|(i, _)| i)
        .sum();
    if run_sum == 0 {
        debug!("no cold-night spell past the first run");
        return None;
    }
    Some(run_sum)
}

/// First position at or after `from` that lies in a spell of at least
/// [`MIN_SPELL_LENGTH`] days satisfying `value <cmp> threshold`.
fn first_spell_day(series: &DailySeries, cmp: Comparison, from: usize) -> Option<usize> {
    let flags = series.condition(cmp, GROWING_SEASON_THRESHOLD);
    let lengths = encode(&flags).per_position_lengths();
    flags
        .iter()
        .zip(lengths.iter())
        .enumerate()
        .skip(from)
        .find(|(_, (flag, len))| **flag && **len >= MIN_SPELL_LENGTH)
        .map(|(i, _)| i)
}

/// GSL: days from the first warm spell to the first cold spell of the second
/// half year.
///
/// The season starts on the first day lying in a spell of at least
/// [`MIN_SPELL_LENGTH`] days with tmean above 5 °C. It ends on the first day
/// past the mid-year boundary (index 182, or 183 in a leap year) lying in a
/// spell of at least as many days with tmean below 5 °C. The length counts
/// both ends.
///
/// Returns `None` for a series that is not a full year and `Some(0)` when
/// either end is not found. An end that falls before the start yields a
/// negative length.
pub fn growing_season_length(tmean: &DailySeries) -> Option<i64> {
    if !tmean.is_full_year() {
        return None;
    }
    let Some(start) = first_spell_day(tmean, Comparison::Gt, 0) else {
        debug!("no growing-season start");
        return Some(0);
    };
    let boundary = july_first_index(tmean.len());
    let Some(end) = first_spell_day(tmean, Comparison::Lt, boundary + 1) else {
        debug!(start, "no growing-season end");
        return Some(0);
    };
    // positions are below 367, so the casts are lossless
    Some(end as i64 - start as i64 + 1)
}
