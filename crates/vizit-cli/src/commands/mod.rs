//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::Path;

use vizit_core::VizitConfig;

/// Load configuration from an explicit path or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<VizitConfig> {
    match config_path {
        Some(path) => Ok(VizitConfig::from_file(Path::new(path))?),
        None => Ok(VizitConfig::default()),
    }
}
