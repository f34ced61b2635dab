//! Client configuration
//!
//! Layered: defaults, then an optional TOML file, then `ROADMAP_*`
//! environment variables. Command-line flags are applied last by the
//! binary through the `with_*` builders.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Base URL environment variable
pub const ENV_BASE_URL: &str = "ROADMAP_BASE_URL";
/// Request timeout environment variable, in seconds
pub const ENV_TIMEOUT_SECS: &str = "ROADMAP_TIMEOUT_SECS";
/// Dashboard link environment variable
pub const ENV_DASHBOARD_URL: &str = "ROADMAP_DASHBOARD_URL";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Console origin the API prefix is appended to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// How long a loaded dataset stays cached, in seconds
    pub cache_ttl_secs: u64,
    /// Maximum cached datasets
    pub cache_capacity: u64,
    /// Link shown on the locked screen
    pub dashboard_url: String,
}

impl ClientConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// With dashboard link
    #[inline]
    #[must_use]
    pub fn with_dashboard_url(mut self, url: impl Into<String>) -> Self {
        self.dashboard_url = url.into();
        self
    }

    /// Parse TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded client config");
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(std::env::vars())
    }

    /// Apply `ROADMAP_*` overrides from `vars`
    pub fn apply_vars<I, K, V>(mut self, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            match key.as_ref() {
                ENV_BASE_URL => self.base_url = value.into(),
                ENV_DASHBOARD_URL => self.dashboard_url = value.into(),
                ENV_TIMEOUT_SECS => {
                    let value = value.into();
                    self.request_timeout_secs = value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::invalid_value(ENV_TIMEOUT_SECS, value))?;
                }
                _ => {}
            }
        }
        Ok(self)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = Url::parse(&self.base_url)
            .map_err(|_| ConfigError::invalid_value("base_url", self.base_url.as_str()))?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::invalid_value("base_url", self.base_url.as_str()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid_value("request_timeout_secs", "0"));
        }
        Ok(())
    }

    /// Request timeout
    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Cache TTL
    #[inline]
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://console.redhat.com".to_string(),
            request_timeout_secs: 60,
            cache_ttl_secs: 300,
            cache_capacity: 16,
            dashboard_url: "https://console.redhat.com/insights/dashboard".to_string(),
        }
    }
}
