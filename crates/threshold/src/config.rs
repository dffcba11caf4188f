//! Configuration for percentile threshold calibration.

use crate::error::ThresholdError;
use crate::period::ReferencePeriod;

/// Parameters of a threshold calibration.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use etccdi_threshold::{CalibrationConfig, ReferencePeriod};
///
/// let config = CalibrationConfig::new(ReferencePeriod::standard())
///     .with_percentile(0.9)
///     .with_window(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationConfig {
    reference_period: ReferencePeriod,
    percentile: f64,
    window: usize,
    min_fraction: f64,
}

impl CalibrationConfig {
    /// Creates a configuration for `reference_period` with defaults.
    ///
    /// Defaults: `percentile = 0.1`, `window = 5` days,
    /// `min_fraction = 0.8`.
    pub fn new(reference_period: ReferencePeriod) -> Self {
        Self {
            reference_period,
            percentile: 0.1,
            window: 5,
            min_fraction: 0.8,
        }
    }

    /// Sets the quantile to compute per day of year (0..=1).
    pub fn with_percentile(mut self, percentile: f64) -> Self {
        self.percentile = percentile;
        self
    }

    /// Sets the width of the centered smoothing window in days.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the minimum fraction of present smoothed values a day of year
    /// needs before a threshold is computed.
    pub fn with_min_fraction(mut self, min_fraction: f64) -> Self {
        self.min_fraction = min_fraction;
        self
    }

    // --- Accessors ---

    /// Returns the reference period.
    pub fn reference_period(&self) -> ReferencePeriod {
        self.reference_period
    }

    /// Returns the quantile.
    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    /// Returns the smoothing window width.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the minimum data fraction.
    pub fn min_fraction(&self) -> f64 {
        self.min_fraction
    }

    /// Validates this configuration.
    ///
    /// Checks that the percentile and minimum fraction are finite and inside
    /// `[0, 1]` and that the window is positive.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !self.percentile.is_finite() || !(0.0..=1.0).contains(&self.percentile) {
            return Err(ThresholdError::InvalidPercentile {
                value: self.percentile,
            });
        }
        if self.window == 0 {
            return Err(ThresholdError::InvalidWindow);
        }
        if !self.min_fraction.is_finite() || !(0.0..=1.0).contains(&self.min_fraction) {
            return Err(ThresholdError::InvalidMinFraction {
                value: self.min_fraction,
            });
        }
        Ok(())
    }
}
