//! Configuration management for dix.
//!
//! Configuration is loaded from multiple sources with precedence:
//! 1. Environment variables (DIX_*)
//! 2. Config file (~/.config/dix/config.toml)
//! 3. Default values
//!
//! The service base address lives here, not in dix-core; the core's contract
//! knows nothing about where the service runs.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use dix_core::ApiClient;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Decision service settings
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the decision service
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Request timeout in seconds. Unset preserves the service's original
    /// behavior: a request that never resolves is never cut off.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Config::default(),
        };

        if let Ok(url) = std::env::var("DIX_API_URL") {
            config.api.url = url;
        }
        if let Ok(secs) = std::env::var("DIX_API_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .context("DIX_API_TIMEOUT_SECS must be a whole number of seconds")?;
            config.api.timeout_secs = Some(secs);
        }

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Default config file location.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "btli", "dix").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Build the API client this configuration describes.
    pub fn client(&self) -> Result<ApiClient> {
        let client = match self.api.timeout_secs {
            Some(secs) => ApiClient::with_timeout(self.api.url.as_str(), Duration::from_secs(secs)),
            None => ApiClient::new(self.api.url.as_str()),
        }
        .context("Failed to create API client")?;
        Ok(client)
    }
}
