//! Configuration for the graph toolkit
//!
//! Only the ambient concerns are configurable: log output and how the
//! demonstration prints its results. Every field has a default, so an empty
//! file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::constants::{DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL};
use crate::types::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Demonstration output configuration
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error or an EnvFilter directive)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (compact, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Demonstration output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Print results as JSON instead of plain text
    #[serde(default)]
    pub print_json: bool,

    /// Start vertex for Prim's algorithm; the first vertex when unset
    #[serde(default)]
    pub prim_start: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Check that `format` names a supported output format
    pub fn validate(&self) -> Result<()> {
        match self.format.as_str() {
            "compact" | "pretty" => Ok(()),
            other => Err(Error::config(format!(
                "Invalid log format: {}. Valid options: compact, pretty",
                other
            ))),
        }
    }
}

// Default value functions for serde
fn default_log_level() -> String { DEFAULT_LOG_LEVEL.to_string() }
fn default_log_format() -> String { DEFAULT_LOG_FORMAT.to_string() }

/// Load configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = std::fs::read_to_string(path.as_ref())?;
    let config: Config = toml::from_str(&config_str)?;
    config.logging.validate()?;
    Ok(config)
}

/// Load configuration from file or use defaults
pub fn load_config_or_default(path: Option<&Path>) -> Config {
    match path {
        Some(path) => match load_config(path) {
            Ok(config) => {
                info!("Loaded configuration from: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config from {}: {}. Using defaults.", path.display(), e);
                Config::default()
            }
        },
        None => {
            info!("No config file specified, using defaults");
            Config::default()
        }
    }
}
