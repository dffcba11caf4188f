//! Error types for the etccdi-threshold crate.

use chrono::NaiveDate;
use etccdi_calendar::CalendarError;

/// Error type for all fallible operations in the etccdi-threshold crate.
///
/// Every variant is a contract violation raised before calibration starts.
/// Days with too little reference data are not errors; they become missing
/// entries of the [`ThresholdProfile`](crate::ThresholdProfile).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    /// Returned when dates and values differ in length.
    #[error("length mismatch: {dates_len} dates but {values_len} values")]
    LengthMismatch {
        /// Number of dates.
        dates_len: usize,
        /// Number of values.
        values_len: usize,
    },

    /// Returned when the same date appears twice in the input.
    #[error("duplicate date in input: {date}")]
    DuplicateDate {
        /// The repeated date.
        date: NaiveDate,
    },

    /// Returned when a present value is NaN or infinite.
    #[error("non-finite value on {date}")]
    NonFiniteValue {
        /// Date of the offending value.
        date: NaiveDate,
    },

    /// Returned when a reference period does not span exactly 30 years.
    #[error("reference period {start}-{end} must span exactly 30 years")]
    InvalidReferencePeriod {
        /// First year of the period.
        start: i32,
        /// Last year of the period.
        end: i32,
    },

    /// Returned when the percentile is not a finite value in [0, 1].
    #[error("invalid percentile: {value} (must be in [0, 1])")]
    InvalidPercentile {
        /// The invalid percentile.
        value: f64,
    },

    /// Returned when the smoothing window is zero.
    #[error("invalid window: must be a positive number of days")]
    InvalidWindow,

    /// Returned when the minimum data fraction is not a finite value in [0, 1].
    #[error("invalid minimum fraction: {value} (must be in [0, 1])")]
    InvalidMinFraction {
        /// The invalid fraction.
        value: f64,
    },

    /// Returned when a profile is built from the wrong number of entries.
    #[error("invalid profile length: expected 365 entries, got {got}")]
    InvalidProfileLength {
        /// Number of entries provided.
        got: usize,
    },

    /// Returned when a profile entry is NaN or infinite.
    #[error("non-finite threshold at day of year {doy}")]
    NonFiniteThreshold {
        /// 1-based day-of-year of the offending entry.
        doy: u16,
    },

    /// Propagated calendar failure.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
