//! Error types for the etccdi-indices crate.

/// Error type for all fallible operations in the etccdi-indices crate.
///
/// These are contract violations. An index that cannot be computed for a
/// given year (wrong length, no qualifying spell) returns `None` instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndexError {
    /// Returned when a present series value is NaN or infinite.
    #[error("non-finite value at position {index}")]
    NonFiniteValue {
        /// 0-based position of the offending value.
        index: usize,
    },

    /// Returned when a comparison threshold is NaN or infinite.
    #[error("non-finite threshold: {value}")]
    NonFiniteThreshold {
        /// The offending threshold.
        value: f64,
    },

    /// Returned when dates and values differ in length.
    #[error("length mismatch: {dates_len} dates but {values_len} values")]
    LengthMismatch {
        /// Number of dates.
        dates_len: usize,
        /// Number of values.
        values_len: usize,
    },

    /// Returned when dates are not strictly increasing.
    #[error("dates must be strictly increasing (violated at position {index})")]
    UnorderedDates {
        /// 0-based position of the first out-of-order date.
        index: usize,
    },

    /// Returned when a threshold-based index is computed without a profile.
    #[error("index {code} requires a threshold profile")]
    MissingThresholdProfile {
        /// Code of the index that was requested.
        code: &'static str,
    },

    /// Returned when an index code is not recognised.
    #[error("unknown index code: {code}")]
    UnknownIndex {
        /// The unrecognised code.
        code: String,
    },
}
