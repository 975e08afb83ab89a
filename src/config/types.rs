use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Connection settings for the remote movie catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL for the catalog API (e.g., "https://api.themoviedb.org/3").
    #[serde(default)]
    pub base_url: Option<String>,
    /// API credential appended to every request as `api_key`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Total request timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where the favorites snapshot lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for persisted keys. Falls back to the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl StorageConfig {
    /// Resolve the storage directory.
    ///
    /// Uses `~/.local/share/movie-browser` on Linux, or the equivalent
    /// returned by `dirs::data_dir()`. Falls back to the current directory.
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("movie-browser")
    }
}
