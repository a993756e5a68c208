//! # Configuration
//!
//! The clients need a single setting: the API base URL. The browser build
//! bakes it in at compile time; native builds can also read a config file
//! and the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the base URL.
pub const API_BASE_URL_ENV: &str = "TRAINER_API_BASE_URL";

/// Errors raised while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL.
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl {
        /// Offending value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The config file could not be read.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be parsed or written.
    #[error("invalid config file: {0}")]
    Format(String),

    /// The config file extension is not supported.
    #[error("unsupported configuration format `{0}`; use yaml, json or toml")]
    UnsupportedFormat(String),
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL without trailing slash, e.g. `http://localhost:8000/api`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TRAINER_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    ///
    /// # Errors
    /// Returns an error if the URL is not an absolute http(s) URL.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Get the API base URL.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Ensure the base URL is usable.
    ///
    /// # Errors
    /// Returns an error if the URL is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason,
        };
        let parsed = url::Url::parse(&self.api_base_url).map_err(|err| invalid(err.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme `{other}`"))),
        }
    }

    /// Render the configuration in `yaml`, `json` or `toml`.
    ///
    /// # Errors
    /// Returns an error for an unknown format or if encoding fails.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn render(&self, format: &str) -> Result<String, ConfigError> {
        match format {
            "yaml" | "yml" => {
                serde_yml::to_string(self).map_err(|err| ConfigError::Format(err.to_string()))
            }
            "json" => serde_json::to_string_pretty(self)
                .map_err(|err| ConfigError::Format(err.to_string())),
            "toml" => toml::to_string(self).map_err(|err| ConfigError::Format(err.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// Precedence, lowest first: built-in default, config file,
    /// `TRAINER_API_BASE_URL`, `base_url_override`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or the resolved
    /// URL is invalid.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config(
        config_path: Option<&std::path::Path>,
        base_url_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default();
            config = match extension {
                "yaml" | "yml" => serde_yml::from_str(&content)
                    .map_err(|err| ConfigError::Format(err.to_string()))?,
                "json" => serde_json::from_str(&content)
                    .map_err(|err| ConfigError::Format(err.to_string()))?,
                "toml" => {
                    toml::from_str(&content).map_err(|err| ConfigError::Format(err.to_string()))?
                }
                other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
            };
        }

        if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }

        if let Some(url) = base_url_override {
            config.api_base_url = url.to_string();
        }

        config.api_base_url = normalize_base_url(&config.api_base_url);
        config.validate()?;
        Ok(config)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
