//! Error types for the etccdi-calendar crate.

/// Error type for all fallible operations in the etccdi-calendar crate.
///
/// Every variant is a caller contract violation: malformed day-of-year
/// values, profiles of the wrong length, or inverted date ranges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=365.
    #[error("invalid day of year: {doy} (must be 1..=365)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a leap alignment receives a sequence of the wrong length.
    #[error("invalid sequence length for leap alignment: expected {expected}, got {got}")]
    InvalidAlignmentLength {
        /// Length the alignment requires (365 to expand, 366 to contract).
        expected: usize,
        /// Length that was provided.
        got: usize,
    },

    /// Returned when a date range ends before it starts.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// First date of the range.
        start: chrono::NaiveDate,
        /// Last date of the range.
        end: chrono::NaiveDate,
    },

    /// Returned when a year cannot be represented as a calendar date.
    #[error("year {year} is outside the supported date range")]
    YearOutOfRange {
        /// The unrepresentable year.
        year: i32,
    },
}
