//! Calibrate command: build a threshold profile from a station record.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use etccdi_threshold::calibrate;

use crate::cli::CalibrateArgs;
use crate::config;
use crate::convert;
use crate::input::read_station_csv;

/// Run the calibration pipeline.
pub fn run(args: CalibrateArgs) -> Result<()> {
    let _cmd = info_span!("calibrate").entered();
    // 1. Load config and settle the column
    let config = config::load(args.config.as_deref())?;
    let cal_cfg = convert::build_calibration_config(&config.calibration)?;
    let column = args.column.unwrap_or_else(|| config.input.tmin.clone());

    // 2. Read the station record
    let record = read_station_csv(&args.input, &config.input, &[column.as_str()])?;
    let values = record.column(&column)?;

    // 3. Calibrate
    let period = cal_cfg.reference_period();
    info!(
        column = column.as_str(),
        start = period.start(),
        end = period.end(),
        percentile = cal_cfg.percentile(),
        "calibrating threshold profile"
    );
    let profile = calibrate(&record.dates, values, &cal_cfg).context("calibration failed")?;
    if profile.n_missing() > 0 {
        warn!(
            n_missing = profile.n_missing(),
            "days of year without a threshold"
        );
    }

    // 4. Write profile JSON
    let json = serde_json::to_string_pretty(&profile).context("failed to serialise profile")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("failed to write profile: {}", args.output.display()))?;
    info!(path = %args.output.display(), "profile written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use etccdi_threshold::ThresholdProfile;
    use std::fmt::Write;

    #[test]
    fn writes_profile_json() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("station.csv");
        let output = dir.path().join("profile.json");

        let mut csv = String::from("date,low\n");
        let start = NaiveDate::from_ymd_opt(1961, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(1990, 12, 31).unwrap();
        for date in start.iter_days().take_while(|d| *d <= end) {
            writeln!(csv, "{date},1.5").unwrap();
        }
        std::fs::write(&input, csv).unwrap();

        run(CalibrateArgs {
            config: None,
            input: input.clone(),
            column: Some("low".to_string()),
            output: output.clone(),
        })
        .expect("calibrate succeeds");

        let profile: ThresholdProfile =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(profile.n_missing(), 0);
        assert!(profile.values().iter().all(|t| *t == Some(1.5)));
    }
}
