//! Application configuration module
//!
//! The backend is addressed through a static function→URL mapping (one
//! entry per cloud function); the messaging core only ever resolves the
//! `messages` entry. Sources, in precedence order:
//!
//! 1. values set explicitly on the builder
//! 2. the `MGRAM_API_URL` environment variable (overrides `messages`)
//! 3. a TOML file with an `[endpoints]` table

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the endpoint the messaging client talks to.
pub const MESSAGES_ENDPOINT: &str = "messages";

/// Environment variable overriding the `messages` endpoint URL.
pub const API_URL_ENV: &str = "MGRAM_API_URL";

/// Application configuration: the function→URL endpoint map.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    endpoints: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    endpoints: HashMap<String, String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the default location, applying the
    /// environment override. A missing config file is not an error as
    /// long as the environment provides the messages endpoint.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        Ok(Self {
            endpoints: file.endpoints,
        })
    }

    /// Platform config file location (`<config dir>/mgram/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mgram").join("config.toml"))
    }

    /// Overwrite the `messages` endpoint from the environment, if set.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                self.endpoints.insert(MESSAGES_ENDPOINT.to_string(), url);
            }
        }
    }

    /// Resolve an endpoint URL by function name.
    pub fn endpoint(&self, name: &str) -> Result<&str, ConfigError> {
        self.endpoints
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingEndpoint(name.to_string()))
    }

    /// Resolve the messaging endpoint URL.
    pub fn messages_url(&self) -> Result<&str, ConfigError> {
        self.endpoint(MESSAGES_ENDPOINT)
    }
}

/// Builder for AppConfig.
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    endpoints: HashMap<String, String>,
}

impl AppConfigBuilder {
    /// Set an endpoint URL by function name.
    pub fn endpoint(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.endpoints.insert(name.into(), url.into());
        self
    }

    /// Set the messaging endpoint URL.
    pub fn messages_url(self, url: impl Into<String>) -> Self {
        self.endpoint(MESSAGES_ENDPOINT, url)
    }

    /// Build the configuration.
    pub fn build(self) -> AppConfig {
        AppConfig {
            endpoints: self.endpoints,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no endpoint configured for '{0}'")]
    MissingEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_endpoints_table() {
        let config = AppConfig::from_toml(
            r#"
            [endpoints]
            messages = "https://functions.example.net/messages"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.messages_url().unwrap(),
            "https://functions.example.net/messages"
        );
    }

    #[test]
    fn missing_endpoint_is_an_error() {
        let config = AppConfig::builder().build();
        let err = config.messages_url().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEndpoint(name) if name == "messages"));
    }

    #[test]
    fn builder_sets_messages_endpoint() {
        let config = AppConfig::builder()
            .messages_url("http://127.0.0.1:3000/messages")
            .build();
        assert_eq!(
            config.messages_url().unwrap(),
            "http://127.0.0.1:3000/messages"
        );
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = AppConfig::from_toml("endpoints = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
