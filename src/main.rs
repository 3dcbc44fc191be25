//! Graph Toolkit demonstration
//!
//! Runs the built-in scenarios through every algorithm and prints the results.
//! An optional TOML configuration file is read from `GRAPH_TOOLKIT_CONFIG`.

use std::path::PathBuf;

use graph_toolkit::demo::{run, scenarios};
use graph_toolkit::load_config_or_default;
use graph_toolkit_core::constants::CONFIG_ENV_VAR;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let config = load_config_or_default(config_path.as_deref());

    graph_toolkit::init(&config.logging)?;
    if let Some(path) = &config_path {
        info!("Configuration file: {}", path.display());
    }

    let prim_start = config.demo.prim_start.as_deref();
    for scenario in scenarios() {
        let report = run(&scenario, prim_start);
        if config.demo.print_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{report}");
        }
    }

    info!("Demonstration complete");
    Ok(())
}
