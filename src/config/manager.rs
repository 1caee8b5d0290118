//! Configuration manager for loading and saving overlay configuration
//!
//! Configuration lives in `config.json` inside the overlay data directory.
//! Writes go through a temporary file in the same directory and are persisted
//! with a rename, so a crash never leaves a half-written file behind.

use crate::config::models::AppConfig;
use crate::error::{FcuOverlayError, Result, StringError};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "FCU_OVERLAY_HOME";

/// Directory name used under `APPDATA`
const APP_DIR_NAME: &str = "FcuOverlay";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the overlay data directory
    ///
    /// Resolution order: `FCU_OVERLAY_HOME`, then `%APPDATA%\FcuOverlay`, then
    /// `./FcuOverlay`.
    pub fn get_data_dir() -> PathBuf {
        if let Ok(home) = std::env::var(DATA_DIR_ENV) {
            return PathBuf::from(home);
        }
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join(APP_DIR_NAME)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_data_dir().join(CONFIG_FILE_NAME)
    }

    /// Ensure the data directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_path = Self::get_config_path();
        let config_dir = config_path
            .parent()
            .ok_or_else(|| FcuOverlayError::ConfigError(StringError::new("Invalid config path")))?;

        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    }

    /// Load configuration from disk
    ///
    /// A missing or unparsable file yields the default configuration; read
    /// errors other than "not found" are returned.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str::<AppConfig>(&json) {
            Ok(mut config) => {
                if config.sanitize() {
                    warn!("Configuration contained out-of-range values; they were clamped");
                }
                info!("Configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_path = Self::get_config_path();
        let config_dir = Self::ensure_config_dir()?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(&config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.flush()?;
        temp.persist(&config_path).map_err(|e| e.error)?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}
