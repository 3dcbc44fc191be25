//! Tracing subscriber setup

use graph_toolkit_core::{Error, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise `config.level` is used as the filter
/// directive. Calling this when a subscriber is already installed (tests,
/// embedding applications) is not an error.
pub fn init(config: &LoggingConfig) -> Result<()> {
    config.validate()?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| Error::config(format!("Invalid log level '{}': {}", config.level, e)))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format.as_str() {
        "pretty" => builder.pretty().try_init(),
        _ => builder.compact().try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }

    tracing::info!("Initializing {} v{}", crate::NAME, crate::VERSION);
    Ok(())
}
