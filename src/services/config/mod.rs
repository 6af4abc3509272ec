// Configuration
// Optional config.toml in the platform config directory. Every field has a default,
// so a missing or broken file never stops the app from starting.

use anyhow::{anyhow, Context, Result};
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::services::persistence::DEFAULT_DEBOUNCE;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DATABASE_FILE_NAME: &str = "weekendly.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekendlyConfig {
    /// Where the SQLite blob store lives. Defaults to the platform data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    pub persist_debounce_ms: u64,
    /// Where exported posters go. Defaults to the downloads folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for WeekendlyConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            persist_debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            export_dir: None,
        }
    }
}

/// Result of loading the config. `error` is set when the file existed but
/// could not be used; `config` then holds the defaults.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: WeekendlyConfig,
    pub error: Option<anyhow::Error>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "weekendly", "weekendly")
}

impl WeekendlyConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| anyhow!("Failed to parse config: {}", e))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Platform location of config.toml, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the platform location, falling back to defaults.
    pub fn load() -> ConfigLoad {
        match Self::default_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                log::warn!("No config directory available, using default settings");
                ConfigLoad {
                    config: Self::default(),
                    error: None,
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> ConfigLoad {
        if !path.exists() {
            log::info!("No config file at {:?}, using defaults", path);
            return ConfigLoad {
                config: Self::default(),
                error: None,
            };
        }

        let loaded = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))
            .and_then(|content| Self::from_toml(&content));

        match loaded {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                ConfigLoad {
                    config,
                    error: None,
                }
            }
            Err(e) => {
                log::warn!("Ignoring config file {:?}: {:#}", path, e);
                ConfigLoad {
                    config: Self::default(),
                    error: Some(e),
                }
            }
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {:?}", path))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.persist_debounce_ms)
    }

    /// Database location: the override, else the platform data dir, else the
    /// working directory.
    pub fn resolved_database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DATABASE_FILE_NAME))
    }

    /// Poster directory: the override, else downloads, else the data dir.
    pub fn resolved_export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = WeekendlyConfig::default();
        assert_eq!(config.persist_debounce_ms, 300);
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert!(config.database_path.is_none());
        assert!(config
            .resolved_database_path()
            .ends_with(DATABASE_FILE_NAME));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let load = WeekendlyConfig::load_from_path(&dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(load.config, WeekendlyConfig::default());
        assert!(load.error.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = WeekendlyConfig::from_toml("persist_debounce_ms = 50\n").unwrap();
        assert_eq!(config.persist_debounce_ms, 50);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn test_invalid_file_falls_back_with_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "persist_debounce_ms = \"soon\"").unwrap();

        let load = WeekendlyConfig::load_from_path(&path);
        assert_eq!(load.config, WeekendlyConfig::default());
        assert!(load.error.is_some(), "Broken config should be reported");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = WeekendlyConfig {
            database_path: Some(dir.path().join("plan.db")),
            persist_debounce_ms: 1000,
            export_dir: Some(dir.path().join("posters")),
        };

        let result = config.save_to_path(&path);
        assert!(result.is_ok(), "Failed to save config: {:?}", result.err());

        let load = WeekendlyConfig::load_from_path(&path);
        assert!(load.error.is_none());
        assert_eq!(load.config, config);
        assert_eq!(load.config.resolved_database_path(), dir.path().join("plan.db"));
        assert_eq!(load.config.resolved_export_dir(), dir.path().join("posters"));
    }
}
