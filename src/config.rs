//! Configuration module for shoebox
//!
//! Manages application configuration: where the library snapshot lives
//! and where stock seed images are read from. Configuration is stored
//! as TOML in the user's config directory and created with defaults on
//! first load.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShoeboxConfig {
    /// Path of the library snapshot file
    #[serde(default = "default_library_path")]
    pub library_path: PathBuf,

    /// Directory scanned for stock seed images on first run
    #[serde(default = "default_stock_dir")]
    pub stock_dir: PathBuf,
}

impl Default for ShoeboxConfig {
    fn default() -> Self {
        Self {
            library_path: default_library_path(),
            stock_dir: default_stock_dir(),
        }
    }
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shoebox")
}

fn default_library_path() -> PathBuf {
    data_dir().join("library.bin")
}

fn default_stock_dir() -> PathBuf {
    data_dir().join("stock")
}

impl ShoeboxConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("shoebox").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed,
    /// or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created,
    /// the configuration cannot be serialized to TOML, or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
