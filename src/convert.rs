//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};
use etccdi_indices::ClimateIndex;
use etccdi_threshold::{CalibrationConfig, ReferencePeriod};
use tracing::info;

use crate::config::{CalibrationToml, IndicesToml};

/// Builds a validated [`CalibrationConfig`] from the TOML calibration section.
pub fn build_calibration_config(cal: &CalibrationToml) -> Result<CalibrationConfig> {
    let [start, end] = cal.reference_period;
    let period = ReferencePeriod::new(start, end).context("invalid [calibration] reference_period")?;
    let config = CalibrationConfig::new(period)
        .with_percentile(cal.percentile)
        .with_window(cal.window)
        .with_min_fraction(cal.min_fraction);
    config.validate().context("invalid [calibration] settings")?;
    Ok(config)
}

/// Resolves the indices to compute.
///
/// An explicit list is returned as given. Otherwise every index is selected,
/// leaving out those that need a threshold profile when none is available.
pub fn select_indices(indices: &IndicesToml, have_thresholds: bool) -> Vec<ClimateIndex> {
    match &indices.compute {
        Some(list) => list.clone(),
        None => ClimateIndex::ALL
            .into_iter()
            .filter(|index| {
                let keep = have_thresholds || !index.needs_threshold();
                if !keep {
                    info!(index = index.code(), "skipped: no threshold profile");
                }
                keep
            })
            .collect(),
    }
}
