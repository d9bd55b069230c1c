use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::generation::{TEMPERATURE_MAX, TEMPERATURE_MIN, TOKEN_COUNT_MAX, TOKEN_COUNT_MIN};

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
    /// Uses `~/.config/textgen/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("textgen").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
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
    /// - `base_url` is an http(s) URL
    /// - `generate_path` starts with `/`
    /// - form defaults are inside the control ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.service.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "service.base_url must start with http:// or https://, got '{}'",
                    self.service.base_url
                ),
            });
        }

        if !self.service.generate_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "service.generate_path must start with '/', got '{}'",
                    self.service.generate_path
                ),
            });
        }

        let tokens = self.form.token_count;
        if !(TOKEN_COUNT_MIN..=TOKEN_COUNT_MAX).contains(&tokens) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "form.token_count must be in {}..={}, got {}",
                    TOKEN_COUNT_MIN, TOKEN_COUNT_MAX, tokens
                ),
            });
        }

        let temperature = self.form.temperature;
        if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "form.temperature must be in {:.1}..={:.1}, got {}",
                    TEMPERATURE_MIN, TEMPERATURE_MAX, temperature
                ),
            });
        }

        Ok(())
    }
}
