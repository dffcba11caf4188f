use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use etccdi_indices::{ClimateIndex, Variable};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EtccdiConfig {
    /// Station CSV layout.
    #[serde(default)]
    pub input: InputToml,

    /// Threshold calibration settings.
    #[serde(default)]
    pub calibration: CalibrationToml,

    /// Index selection.
    #[serde(default)]
    pub indices: IndicesToml,
}

/// Loads the TOML file at `path`, or the built-in defaults without one.
pub fn load(path: Option<&Path>) -> Result<EtccdiConfig> {
    let Some(path) = path else {
        return Ok(EtccdiConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub missing_marker: Option<String>,
    #[serde(default = "default_tmin")]
    pub tmin: String,
    #[serde(default = "default_tmax")]
    pub tmax: String,
    #[serde(default = "default_tmean")]
    pub tmean: String,
    #[serde(default = "default_precip")]
    pub precip: String,
}

impl InputToml {
    /// CSV column holding `variable`.
    pub fn column(&self, variable: Variable) -> &str {
        match variable {
            Variable::Tmin => &self.tmin,
            Variable::Tmax => &self.tmax,
            Variable::Tmean => &self.tmean,
            Variable::Precip => &self.precip,
        }
    }
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            date_column: default_date_column(),
            date_format: default_date_format(),
            missing_marker: None,
            tmin: default_tmin(),
            tmax: default_tmax(),
            tmean: default_tmean(),
            precip: default_precip(),
        }
    }
}

fn default_date_column() -> String {
    "date".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_tmin() -> String {
    "tmin".to_string()
}
fn default_tmax() -> String {
    "tmax".to_string()
}
fn default_tmean() -> String {
    "tmean".to_string()
}
fn default_precip() -> String {
    "precip".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationToml {
    #[serde(default = "default_reference_period")]
    pub reference_period: [i32; 2],
    #[serde(default = "default_percentile")]
    pub percentile: f64,
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_min_fraction")]
    pub min_fraction: f64,
}

impl Default for CalibrationToml {
    fn default() -> Self {
        Self {
            reference_period: default_reference_period(),
            percentile: default_percentile(),
            window: default_window(),
            min_fraction: default_min_fraction(),
        }
    }
}

fn default_reference_period() -> [i32; 2] {
    [1961, 1990]
}
fn default_percentile() -> f64 {
    0.1
}
fn default_window() -> usize {
    5
}
fn default_min_fraction() -> f64 {
    0.8
}

/// Index selection. Without an explicit list every index is computed,
/// skipping those that need a threshold profile when none is given.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IndicesToml {
    #[serde(default)]
    pub compute: Option<Vec<ClimateIndex>>,
    #[serde(default)]
    pub thresholds: Option<PathBuf>,
}
