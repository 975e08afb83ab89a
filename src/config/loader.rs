use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `catalog.base_url`.
pub const BASE_URL_ENV: &str = "MOVIE_API_BASE_URL";
/// Environment variable overriding `catalog.api_key`.
pub const API_KEY_ENV: &str = "MOVIE_API_KEY";

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
    /// Uses `~/.config/movie-browser/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("movie-browser").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`, then applies environment overrides.
    ///
    /// - If the file doesn't exist, starts from `Config::default()`.
    /// - If the file exists, parses it as TOML.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Self::parse(&content, path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        config.warn_if_incomplete();
        Ok(config)
    }

    /// Parse TOML content. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply `MOVIE_API_BASE_URL` / `MOVIE_API_KEY` on top of file values.
    ///
    /// Takes a lookup function so tests don't have to mutate process env.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.catalog.base_url = Some(url);
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.catalog.api_key = Some(key);
        }
    }

    /// Validates the configuration.
    ///
    /// Missing credentials are not an error here: the app keeps running and
    /// each catalog call fails on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "catalog.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.catalog.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "catalog.connect_timeout_seconds must be greater than zero"
                    .to_string(),
            });
        }

        Ok(())
    }

    /// Emit a diagnostic for each missing catalog setting.
    pub fn warn_if_incomplete(&self) {
        if self.catalog.base_url.as_deref().map_or(true, str::is_empty) {
            tracing::warn!(
                env = BASE_URL_ENV,
                "Catalog base URL is not configured; catalog requests will fail"
            );
        }
        if let crate::config::CredentialStatus::Unconfigured { reason } =
            self.catalog.resolve_credential()
        {
            tracing::warn!(env = API_KEY_ENV, reason = %reason, "Catalog API key missing");
        }
    }
}
