//! Catalogue of the supported indices, keyed by their ETCCDI codes.

use std::fmt;
use std::str::FromStr;

use etccdi_threshold::ThresholdProfile;
use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::fixed;
use crate::persistence;
use crate::series::DailySeries;

/// Daily variable an index is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    /// Daily minimum temperature, °C.
    Tmin,
    /// Daily maximum temperature, °C.
    Tmax,
    /// Daily mean temperature, °C.
    Tmean,
    /// Daily precipitation total, mm.
    Precip,
}

impl Variable {
    /// Lower-case name, as used for CSV columns and config keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tmin => "tmin",
            Self::Tmax => "tmax",
            Self::Tmean => "tmean",
            Self::Precip => "precip",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A supported climate index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClimateIndex {
    /// Frost days.
    Fd,
    /// Summer days.
    Sd,
    /// Icing days.
    Id,
    /// Tropical nights.
    Tn,
    /// Heavy precipitation days.
    Rr10,
    /// Very heavy precipitation days.
    Rr20,
    /// Consecutive frost days.
    Cfd,
    /// Consecutive summer days.
    Csd,
    /// Consecutive dry days.
    Cdd,
    /// Heating degree days.
    Hdd,
    /// Cold-night persistence.
    Cn,
    /// Growing-season length.
    Gsl,
}

impl ClimateIndex {
    /// Every index, in catalogue order.
    pub const ALL: [ClimateIndex; 12] = [
        Self::Fd,
        Self::Sd,
        Self::Id,
        Self::Tn,
        Self::Rr10,
        Self::Rr20,
        Self::Cfd,
        Self::Csd,
        Self::Cdd,
        Self::Hdd,
        Self::Cn,
        Self::Gsl,
    ];

    /// ETCCDI code, upper case.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fd => "FD",
            Self::Sd => "SD",
            Self::Id => "ID",
            Self::Tn => "TN",
            Self::Rr10 => "RR10",
            Self::Rr20 => "RR20",
            Self::Cfd => "CFD",
            Self::Csd => "CSD",
            Self::Cdd => "CDD",
            Self::Hdd => "HDD",
            Self::Cn => "CN",
            Self::Gsl => "GSL",
        }
    }

    /// Looks an index up by code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::UnknownIndex`] for an unrecognised code.
    pub fn from_code(code: &str) -> Result<Self, IndexError> {
        Self::ALL
            .into_iter()
            .find(|index| index.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| IndexError::UnknownIndex {
                code: code.to_string(),
            })
    }

    /// Variable the index reads.
    pub fn variable(self) -> Variable {
        match self {
            Self::Fd | Self::Tn | Self::Cfd | Self::Cn => Variable::Tmin,
            Self::Sd | Self::Id | Self::Csd => Variable::Tmax,
            Self::Hdd | Self::Gsl => Variable::Tmean,
            Self::Rr10 | Self::Rr20 | Self::Cdd => Variable::Precip,
        }
    }

    /// Returns `true` if the index needs a calibrated [`ThresholdProfile`].
    pub fn needs_threshold(self) -> bool {
        matches!(self, Self::Cn)
    }

    /// Computes the index for one year.
    ///
    /// Counts and run lengths are returned as whole-valued floats. `Ok(None)`
    /// means the year yields no value.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::MissingThresholdProfile`] if the index needs a
    /// profile and none is given.
    pub fn compute(
        self,
        series: &DailySeries,
        thresholds: Option<&ThresholdProfile>,
    ) -> Result<Option<f64>, IndexError> {
        let count = |n: Option<usize>| n.map(|n| n as f64);
        let value = match self {
            Self::Fd => count(fixed::frost_days(series)),
            Self::Sd => count(fixed::summer_days(series)),
            Self::Id => count(fixed::icing_days(series)),
            Self::Tn => count(fixed::tropical_nights(series)),
            Self::Rr10 => count(fixed::heavy_precip_days(series)),
            Self::Rr20 => count(fixed::very_heavy_precip_days(series)),
            Self::Cfd => count(fixed::consecutive_frost_days(series)),
            Self::Csd => count(fixed::consecutive_summer_days(series)),
            Self::Cdd => count(fixed::consecutive_dry_days(series)),
            Self::Hdd => fixed::heating_degree_days(series),
            Self::Cn => {
                let profile = thresholds
                    .ok_or(IndexError::MissingThresholdProfile { code: self.code() })?;
                count(persistence::cold_nights(series, profile))
            }
            Self::Gsl => persistence::growing_season_length(series).map(|n| n as f64),
        };
        Ok(value)
    }
}

impl fmt::Display for ClimateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ClimateIndex {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for ClimateIndex {
    type Error = IndexError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code)
    }
}

impl From<ClimateIndex> for String {
    fn from(index: ClimateIndex) -> Self {
        index.code().to_string()
    }
}
