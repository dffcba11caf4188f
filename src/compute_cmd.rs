//! Compute command: annual indices for a station record.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use etccdi_indices::{ClimateIndex, annual_index};
use etccdi_threshold::ThresholdProfile;

use crate::cli::ComputeArgs;
use crate::config;
use crate::convert;
use crate::input::read_station_csv;

/// Per-year index values, serialised as `{ year: { code: value|null } }`.
pub type IndexTable = BTreeMap<i32, BTreeMap<ClimateIndex, Option<f64>>>;

fn read_profile(path: &std::path::Path) -> Result<ThresholdProfile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read threshold profile: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse threshold profile: {}", path.display()))
}

/// Run the index computation pipeline.
pub fn run(args: ComputeArgs) -> Result<()> {
    let _cmd = info_span!("compute").entered();
    // 1. Load config and the optional threshold profile
    let config = config::load(args.config.as_deref())?;
    let thresholds = match args.thresholds.as_ref().or(config.indices.thresholds.as_ref()) {
        Some(path) => Some(read_profile(path)?),
        None => None,
    };
    let indices = convert::select_indices(&config.indices, thresholds.is_some());
    if indices.is_empty() {
        bail!("no indices selected");
    }
    if let (None, Some(index)) = (&thresholds, indices.iter().find(|i| i.needs_threshold())) {
        bail!(
            "index {index} needs a threshold profile: pass --thresholds or set [indices].thresholds"
        );
    }

    // 2. Read only the columns the selected indices use
    let columns: BTreeSet<&str> = indices
        .iter()
        .map(|i| config.input.column(i.variable()))
        .collect();
    let columns: Vec<&str> = columns.into_iter().collect();
    let record = read_station_csv(&args.input, &config.input, &columns)?;

    // 3. Compute each index per year
    let mut table = IndexTable::new();
    for index in &indices {
        let values = record.column(config.input.column(index.variable()))?;
        let per_year = annual_index(*index, &record.dates, values, thresholds.as_ref())
            .with_context(|| format!("failed to compute {index}"))?;
        for (year, value) in per_year {
            table.entry(year).or_default().insert(*index, value);
        }
    }
    info!(
        n_years = table.len(),
        n_indices = indices.len(),
        "indices computed"
    );

    // 4. Write JSON
    let json = serde_json::to_string_pretty(&table).context("failed to serialise indices")?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write indices: {}", path.display()))?;
            info!(path = %path.display(), "indices written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
