// src/logging.rs

//! Log output for the `taskboard` binary.
//!
//! The final board goes to stdout, so every trace line (store mutations,
//! engine steps, sensor activation, collision picks) is written to stderr.
//!
//! The filter is chosen from, in order:
//! 1. `--log-level`, applied to every target;
//! 2. `TASKBOARD_LOG`, read as an `EnvFilter` directive list, so
//!    `TASKBOARD_LOG=info,taskboard::sensor=trace` narrows noisy modules;
//! 3. `info`.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

const LOG_ENV: &str = "TASKBOARD_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = build_filter(cli_level, std::env::var(LOG_ENV).ok().as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// An unparsable `TASKBOARD_LOG` falls back to `info` rather than failing
/// the run.
fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(directive_for(level));
    }
    env.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn directive_for(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
