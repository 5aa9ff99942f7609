//! stderr logging for the CLI.
//!
//! Only events from the propcheck crates are shown. The library crates emit
//! `debug!` for each failing prop or key and `trace!` for base checker
//! rejections, so `--log-level debug` explains a failed `check` run.

use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Targets whose events reach stderr.
pub const CRATE_TARGETS: [&str; 4] = [
    "propcheck",
    "propcheck_core",
    "propcheck_keys",
    "propcheck_contract",
];

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Filter passing events at `level` or above from [`CRATE_TARGETS`].
pub fn crate_filter(level: Level) -> Targets {
    CRATE_TARGETS
        .iter()
        .fold(Targets::new(), |targets, target| {
            targets.with_target(*target, level)
        })
}

/// Install the stderr subscriber. Later calls are ignored.
pub fn init_logging(format: LogFormat, level: Level) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);
    let registry = tracing_subscriber::registry().with(crate_filter(level));

    let _ = match format {
        LogFormat::Text => registry.with(layer).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };
}
