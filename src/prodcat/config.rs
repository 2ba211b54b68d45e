use crate::error::{CatalogError, Result};
use crate::filter::CategoryFilterMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Where configuration is read from: the project's `.prodcat/` or the user's data dir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Configuration for prodcat, stored in `.prodcat/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory holding users.json, categories.json and products.json.
    /// When absent, the built-in sample catalog is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Whether the category chips filter rows
    #[serde(default)]
    pub category_filter: CategoryFilterMode,
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DataDir => self
                .data_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            ConfigKey::CategoryFilter => self.category_filter.to_string(),
        }
    }

    /// Sets a key from its textual form. An empty `data-dir` unsets it.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::DataDir => {
                self.data_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            ConfigKey::CategoryFilter => {
                self.category_filter = value.parse().map_err(CatalogError::Api)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DataDir,
    CategoryFilter,
}

impl ConfigKey {
    pub fn all() -> &'static [ConfigKey] {
        &[ConfigKey::DataDir, ConfigKey::CategoryFilter]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::DataDir => "data-dir",
            ConfigKey::CategoryFilter => "category-filter",
        }
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::all()
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| CatalogError::Api(format!("Unknown config key: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.category_filter, CategoryFilterMode::Inert);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = CatalogConfig::load(dir.path().join("missing")).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join(".prodcat");

        let mut config = CatalogConfig::default();
        config.set(ConfigKey::CategoryFilter, "membership").unwrap();
        config.set(ConfigKey::DataDir, "/srv/catalog").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = CatalogConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.category_filter, CategoryFilterMode::Membership);
        assert_eq!(loaded.get(ConfigKey::DataDir), "/srv/catalog");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = CatalogConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, CatalogConfig::default());
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let mut config = CatalogConfig::default();
        let err = config.set(ConfigKey::CategoryFilter, "strict").unwrap_err();
        assert!(matches!(err, CatalogError::Api(_)));
        assert_eq!(config.category_filter, CategoryFilterMode::Inert);
    }

    #[test]
    fn test_empty_data_dir_unsets() {
        let mut config = CatalogConfig::default();
        config.set(ConfigKey::DataDir, "data").unwrap();
        config.set(ConfigKey::DataDir, "").unwrap();
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(
            "category-filter".parse::<ConfigKey>().unwrap(),
            ConfigKey::CategoryFilter
        );
        assert!("file-ext".parse::<ConfigKey>().is_err());
    }
}
