//! Client configuration.
//!
//! The only tunable is the API base URL. Resolution priority:
//! config.toml > environment variable > built-in default.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Fallback base URL for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Environment variable that overrides the base URL.
pub const API_BASE_URL_ENV: &str = "QUILL_API_BASE_URL";

/// Connection settings for the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// On-disk layout of `<config-dir>/quill/config.toml`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: Option<ApiSection>,
}

#[derive(Debug, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads the base URL from `QUILL_API_BASE_URL`, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        match env::var(API_BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Loads the configuration with full resolution priority.
    ///
    /// 1. `<config-dir>/quill/config.toml`, when present and valid
    /// 2. `QUILL_API_BASE_URL`
    /// 3. [`DEFAULT_API_BASE_URL`]
    ///
    /// An unreadable or malformed config file is logged and skipped, never
    /// fatal.
    pub fn load() -> Self {
        if let Some(path) = Self::default_config_path()
            && path.exists()
        {
            match Self::load_file(&path) {
                Ok(Some(config)) => {
                    tracing::debug!(path = %path.display(), "loaded API config from file");
                    return config;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config file");
                }
            }
        }
        Self::from_env()
    }

    /// Parses a config file. Returns `Ok(None)` when the file exists but
    /// does not set a base URL.
    pub fn load_file(path: &Path) -> Result<Option<Self>> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        Ok(file
            .api
            .and_then(|api| api.base_url)
            .filter(|url| !url.is_empty())
            .map(Self::new))
    }

    /// Returns the path to the config file: `<config-dir>/quill/config.toml`.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quill").join("config.toml"))
    }
}
