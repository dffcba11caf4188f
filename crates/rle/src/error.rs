//! Error types for the etccdi-rle crate.

/// Error type for building a [`RunEncoding`](crate::RunEncoding) from parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RleError {
    /// Returned when the value and length vectors differ in size.
    #[error("length mismatch: {values} values but {lengths} run lengths")]
    LengthMismatch {
        /// Number of run values.
        values: usize,
        /// Number of run lengths.
        lengths: usize,
    },

    /// Returned when a run has length zero.
    #[error("run {run} has length zero")]
    ZeroLengthRun {
        /// 0-based index of the offending run.
        run: usize,
    },

    /// Returned when two adjacent runs carry equal values.
    #[error("runs {run} and {} carry equal values", .run + 1)]
    AdjacentEqualRuns {
        /// 0-based index of the first of the two runs.
        run: usize,
    },
}
