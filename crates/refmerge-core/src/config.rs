//! Merge session configuration.

use crate::error::{RefMergeError, Result};
use crate::identity::DEFAULT_ID_PREFIX;
use crate::types::DEFAULT_CELL_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MergeConfig {
    /// Edge length of an exterior grid cell in world units.
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    /// Prefix of generated ref ids.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_cell_size() -> f32 {
    DEFAULT_CELL_SIZE
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            id_prefix: default_id_prefix(),
        }
    }
}

impl MergeConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing, empty or unparsable file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            tracing::warn!("Config file {:?} is empty, using default config", path);
            return Ok(Self::default());
        }

        let config: MergeConfig = match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("Failed to parse config {:?} ({}), using default", path, e);
                return Ok(Self::default());
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(RefMergeError::Config(format!(
                "cell_size must be a positive number, got {}",
                self.cell_size
            )));
        }
        if self.id_prefix.is_empty() {
            return Err(RefMergeError::Config("id_prefix must not be empty".into()));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = MergeConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, MergeConfig::default());
        assert_eq!(config.cell_size, 8192.0);
        assert_eq!(config.id_prefix, "ref#");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"cell_size": 4096.0}"#).unwrap();
        let config = MergeConfig::load(&path).unwrap();
        assert_eq!(config.cell_size, 4096.0);
        assert_eq!(config.id_prefix, "ref#");
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(MergeConfig::load(&path).unwrap(), MergeConfig::default());
    }

    #[test]
    fn test_invalid_cell_size_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"cell_size": 0.0}"#).unwrap();
        assert!(matches!(MergeConfig::load(&path), Err(RefMergeError::Config(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = MergeConfig {
            cell_size: 1024.0,
            id_prefix: "obj#".into(),
        };
        config.save(&path).unwrap();
        assert_eq!(MergeConfig::load(&path).unwrap(), config);
    }
}
