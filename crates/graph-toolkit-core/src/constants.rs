//! Global constants used throughout the graph toolkit
//!
//! Shared defaults kept in one place so the configuration layer and the demo
//! agree on them.

/// Default tracing filter when neither the config file nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log output format
///
/// Accepted values are `compact` and `pretty`.
pub const DEFAULT_LOG_FORMAT: &str = "compact";

/// Environment variable holding the optional configuration file path
pub const CONFIG_ENV_VAR: &str = "GRAPH_TOOLKIT_CONFIG";

/// Initial capacity of per-vertex neighbor lists
pub const NEIGHBOR_LIST_CAPACITY: usize = 4;
