//! Tracing setup for the `etccdi` binary.

use tracing_subscriber::EnvFilter;

/// Workspace crates whose events pass the default filter.
const CRATE_TARGETS: &[&str] = &[
    "etccdi",
    "etccdi_calendar",
    "etccdi_indices",
    "etccdi_rle",
    "etccdi_stats",
    "etccdi_threshold",
];

/// Level for a `-v` count: none is warn, then info, debug and trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Directive string enabling `level` on every workspace crate and nothing
/// else, so dependency noise stays out of the output.
fn workspace_directives(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. Events go to stderr so JSON printed on
/// stdout stays clean. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(workspace_directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
