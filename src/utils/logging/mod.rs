//! Logging setup
//!
//! The library itself only emits `tracing` events. Applications embedding the
//! search service call [`init_logging`] once at startup to install a
//! subscriber.

use crate::config::LoggingConfig;
use crate::utils::error::{Result, SearchError};
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber described by `config`
///
/// `RUST_LOG` takes precedence over `config.level` when set. Fails instead of
/// panicking if a global subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(directives.as_deref(), &config.level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| SearchError::config(format!("Failed to install logger: {}", e)))
}

/// Filter from `RUST_LOG`-style directives, falling back to `level`
///
/// Directives that fail to parse are ignored in favour of `level`.
fn build_filter(directives: Option<&str>, level: &str) -> Result<EnvFilter> {
    if let Some(filter) = directives.and_then(|d| EnvFilter::try_new(d).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(level)
        .map_err(|e| SearchError::config(format!("Invalid log level '{}': {}", level, e)))
}
