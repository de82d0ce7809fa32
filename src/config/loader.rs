use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::theme::parse_color;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/garagefront/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("garagefront").join("config.toml")
    }

    /// Default log file location, used when `[logging] file` is unset.
    pub fn default_log_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("garagefront").join("garagefront.log")
    }

    /// Log file path after applying config.
    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both brand colors parse as `#rrggbb`
    /// - Reset delay and tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("theme.brand_red", &self.theme.brand_red),
            ("theme.brand_blue", &self.theme.brand_blue),
        ] {
            if parse_color(value).is_none() {
                return Err(ConfigError::ValidationError {
                    message: format!("{key} must be a #rrggbb color, got '{value}'"),
                });
            }
        }

        if self.form.reset_delay_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "form.reset_delay_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
