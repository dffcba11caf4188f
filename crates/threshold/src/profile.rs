//! Day-of-year threshold profiles.

use std::borrow::Cow;

use etccdi_calendar::{Doy, LEAP_YEAR_LEN, NON_LEAP_YEAR_LEN, expand_to_leap};
use serde::{Deserialize, Serialize};

use crate::error::ThresholdError;

/// Percentile thresholds for each day of the folded 365-day calendar.
///
/// Entry `i` belongs to day-of-year `i + 1`; `None` marks a day whose
/// reference data was insufficient. Built once per station, reference period
/// and percentile, then reused for every year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<f64>>", into = "Vec<Option<f64>>")]
pub struct ThresholdProfile {
    values: Vec<Option<f64>>,
}

impl ThresholdProfile {
    /// Builds a profile from exactly 365 entries.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::InvalidProfileLength`] for any other length
    /// and [`ThresholdError::NonFiniteThreshold`] for NaN or infinite
    /// entries.
    pub fn from_values(values: Vec<Option<f64>>) -> Result<Self, ThresholdError> {
        if values.len() != NON_LEAP_YEAR_LEN {
            return Err(ThresholdError::InvalidProfileLength { got: values.len() });
        }
        if let Some(i) = values
            .iter()
            .position(|v| v.is_some_and(|x| !x.is_finite()))
        {
            return Err(ThresholdError::NonFiniteThreshold { doy: i as u16 + 1 });
        }
        Ok(Self { values })
    }

    /// A profile with the same threshold on every day.
    pub fn constant(threshold: f64) -> Result<Self, ThresholdError> {
        Self::from_values(vec![Some(threshold); NON_LEAP_YEAR_LEN])
    }

    /// Threshold for a day of year.
    pub fn get(&self, doy: Doy) -> Option<f64> {
        self.values[doy.index()]
    }

    /// All 365 entries in day-of-year order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Number of days without a threshold.
    pub fn n_missing(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Returns the profile laid out for a series of `series_len` days.
    ///
    /// A 366-day series gets the leap expansion; any other length gets the
    /// 365 entries unchanged.
    pub fn aligned_to(&self, series_len: usize) -> Cow<'_, [Option<f64>]> {
        if series_len == LEAP_YEAR_LEN {
            match expand_to_leap(&self.values) {
                Ok(expanded) => Cow::Owned(expanded),
                // unreachable: length checked at construction
                Err(_) => Cow::Borrowed(&self.values),
            }
        } else {
            Cow::Borrowed(&self.values)
        }
    }
}

impl TryFrom<Vec<Option<f64>>> for ThresholdProfile {
    type Error = ThresholdError;

    fn try_from(values: Vec<Option<f64>>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<ThresholdProfile> for Vec<Option<f64>> {
    fn from(profile: ThresholdProfile) -> Self {
        profile.values
    }
}
