//! Year-length helpers and the year-length gate.

/// Length of a non-leap year in days.
pub const NON_LEAP_YEAR_LEN: usize = 365;

/// Length of a leap year in days.
pub const LEAP_YEAR_LEN: usize = 366;

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian year (365 or 366).
pub fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) {
        LEAP_YEAR_LEN
    } else {
        NON_LEAP_YEAR_LEN
    }
}

/// Returns `true` iff the series holds exactly one full year (365 or 366 days).
///
/// Every index calls this first; a series failing the gate yields a missing
/// result rather than an error.
pub fn is_valid_year_length<T>(series: &[T]) -> bool {
    matches!(series.len(), NON_LEAP_YEAR_LEN | LEAP_YEAR_LEN)
}

/// 0-based position after which the end of a growing season is searched.
///
/// 183 for a leap-length series, 182 otherwise.
pub fn july_first_index(year_len: usize) -> usize {
    if year_len == LEAP_YEAR_LEN { 183 } else { 182 }
}
