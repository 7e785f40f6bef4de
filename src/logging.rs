//! Tracing subscriber setup
//!
//! Logs go to stderr so that reports printed on stdout stay machine-readable.

use crate::config::LoggingConfig;
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
/// (or `debug` when verbose) for this crate and the HTTP layers.
#[must_use]
pub fn env_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { config.level.as_str() };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,travelos={level},tower_http={level}")))
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, verbose))
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    result.map_err(|err| anyhow!("Failed to initialize logging: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_debug() {
        let config = LoggingConfig::default();
        if std::env::var("RUST_LOG").is_err() {
            let filter = env_filter(&config, true).to_string();
            assert!(filter.contains("travelos=debug"));
            let filter = env_filter(&config, false).to_string();
            assert!(filter.contains("travelos=info"));
        }
    }
}
