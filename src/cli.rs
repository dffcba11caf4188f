use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ETCCDI climate extreme indices from daily station records.
#[derive(Parser)]
#[command(
    name = "etccdi",
    version,
    about = "ETCCDI climate extreme indices from daily station records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calibrate a day-of-year percentile threshold profile.
    Calibrate(CalibrateArgs),
    /// Compute annual indices for a station record.
    Compute(ComputeArgs),
}

/// Arguments for the `calibrate` subcommand.
#[derive(clap::Args)]
pub struct CalibrateArgs {
    /// Path to TOML configuration file. Built-in defaults apply without one.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the station CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// CSV column to calibrate on. Defaults to the configured tmin column.
    #[arg(long)]
    pub column: Option<String>,

    /// Path for the threshold profile JSON output.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Path to TOML configuration file. Built-in defaults apply without one.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the station CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Threshold profile JSON written by `calibrate`, needed for CN.
    #[arg(short, long)]
    pub thresholds: Option<PathBuf>,

    /// Path for the indices JSON output. Printed to stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
