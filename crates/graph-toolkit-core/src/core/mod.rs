//! Application configuration

/// Configuration structures and loading
pub mod config;

// Re-export commonly used items
pub use config::{Config, DemoConfig, LoggingConfig, load_config, load_config_or_default};
