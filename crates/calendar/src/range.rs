//! Gregorian date ranges.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;

/// Generates every date from `start` to `end`, both inclusive.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateRange`] if `end` precedes `start`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
    if end < start {
        return Err(CalendarError::InvalidDateRange { start, end });
    }
    let n_days = (end - start).num_days() as usize + 1;
    Ok(start.iter_days().take(n_days).collect())
}

/// Returns Jan 1 of `start_year` and Dec 31 of `end_year`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if either year cannot be
/// represented, or [`CalendarError::InvalidDateRange`] if `end_year` precedes
/// `start_year`.
pub fn year_bounds(start_year: i32, end_year: i32) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
        .ok_or(CalendarError::YearOutOfRange { year: start_year })?;
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31)
        .ok_or(CalendarError::YearOutOfRange { year: end_year })?;
    if end < start {
        return Err(CalendarError::InvalidDateRange { start, end });
    }
    Ok((start, end))
}

/// Widens `[start, end]` by `pad` days on each side.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the padded bounds overflow the
/// representable calendar.
pub fn pad_range(
    start: NaiveDate,
    end: NaiveDate,
    pad: u64,
) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    let lo = start
        .checked_sub_days(Days::new(pad))
        .ok_or(CalendarError::YearOutOfRange { year: start.year() })?;
    let hi = end
        .checked_add_days(Days::new(pad))
        .ok_or(CalendarError::YearOutOfRange { year: end.year() })?;
    Ok((lo, hi))
}
