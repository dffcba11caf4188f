//! Percentile threshold calibration for ETCCDI persistence indices.
//!
//! Builds a [`ThresholdProfile`] (one threshold per day of the folded
//! 365-day calendar) from a station's daily record over a 30-year
//! [`ReferencePeriod`]. The profile is computed once and reused for every
//! year the station's indices are computed for.
//!
//! # Pipeline
//!
//! 1. **Label** each reference date with its leap-folded day of year
//! 2. **Pad** the period by half a window and left-join the observations
//! 3. **Smooth** with a centered rolling mean
//! 4. **Reduce** each day of year to a quantile, or missing when too little
//!    data is present
//!
//! # Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use etccdi_threshold::{CalibrationConfig, ReferencePeriod, calibrate};
//!
//! let start = NaiveDate::from_ymd_opt(1961, 1, 1).unwrap();
//! let dates: Vec<NaiveDate> = start.iter_days().take(10_957).collect();
//! let tmin: Vec<Option<f64>> = dates.iter().map(|_| Some(2.5)).collect();
//!
//! let config = CalibrationConfig::new(ReferencePeriod::standard()).with_percentile(0.1);
//! let profile = calibrate(&dates, &tmin, &config).unwrap();
//! assert_eq!(profile.values().len(), 365);
//! ```

mod calibrate;
mod config;
mod error;
mod period;
mod profile;

pub use calibrate::calibrate;
pub use config::CalibrationConfig;
pub use error::ThresholdError;
pub use period::{REFERENCE_PERIOD_YEARS, ReferencePeriod};
pub use profile::ThresholdProfile;
