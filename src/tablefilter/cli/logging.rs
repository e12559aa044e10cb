//! Logging for the CLI, built on `tracing` and `tracing-subscriber`.
//!
//! Library code only emits events; this module installs the subscriber. Logs
//! go to stderr so stdout stays clean for tables and `--json` output.
//!
//! # Levels
//!
//! - `warn` (default): skipped rows, unusable payload entries
//! - `info` (`-v`): which screen and file were loaded, config writes
//! - `debug` (`-vv`): requests, applied intents, record counts
//! - `trace` (`-vvv`): view recomputations inside the filter state
//!
//! `RUST_LOG` overrides the verbosity flag when set.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps the `-v` count to a level.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("tablefilter={}", level.as_str().to_lowercase()))
    })
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(verbosity: u8, with_ansi: bool) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(with_ansi)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(level_for_verbosity(verbosity)))
        .with(layer)
        .try_init();
}
