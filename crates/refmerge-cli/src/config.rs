//! Configuration file discovery.

use anyhow::{Context, Result};
use refmerge_core::MergeConfig;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default location of the configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("refmerge").join("config.json"))
}

/// Resolve the configuration: explicit path, then `REFMERGE_CONFIG`, then
/// the platform config directory, then built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<MergeConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("REFMERGE_CONFIG").map(PathBuf::from))
        .or_else(default_config_path);

    match path {
        Some(path) => {
            info!("Using config {:?}", path);
            MergeConfig::load(&path).with_context(|| format!("Failed to load config {:?}", path))
        }
        None => Ok(MergeConfig::default()),
    }
}
