// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client configuration.
//!
//! Resolution order, lowest to highest: built-in defaults, the `[client]`
//! table of the TOML file named by `PISKY_CONFIG`, `PISKY_*` environment
//! variables (a `.env` file is honoured), then explicit overrides from the CLI.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_CONFIG_PATH: &str = "PISKY_CONFIG";
pub const ENV_API_URL: &str = "PISKY_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "PISKY_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "PISKY_USER_AGENT";

fn default_user_agent() -> String {
    format!("pisky-client/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the API server, without a trailing slash
    pub api_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    client: ClientConfig,
}

impl ClientConfig {
    /// Defaults, then `PISKY_CONFIG` file, then environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let base = match env::var(ENV_CONFIG_PATH) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim()))?,
            _ => Self::default(),
        };

        base.with_env_from(|key| env::var(key).ok())?.validated()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.client)
    }

    /// Apply `PISKY_*` variables obtained through `lookup`
    pub fn with_env_from<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(parse_timeout(ENV_TIMEOUT_SECS, &raw)?),
            None => None,
        };

        Ok(self.with_overrides(
            lookup(ENV_API_URL),
            timeout_secs,
            lookup(ENV_USER_AGENT),
        ))
    }

    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        timeout_secs: Option<u64>,
        user_agent: Option<String>,
    ) -> Self {
        if let Some(api_url) = api_url.filter(|v| !v.trim().is_empty()) {
            self.api_url = api_url.trim().to_string();
        }
        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(user_agent) = user_agent.filter(|v| !v.trim().is_empty()) {
            self.user_agent = user_agent;
        }
        self
    }

    /// Normalises the base URL and rejects unusable values
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.api_url = self.api_url.trim().trim_end_matches('/').to_string();

        let url = Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidValue {
            key: "api_url".to_string(),
            reason: format!("{}: {}", self.api_url, e),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidValue {
                key: "api_url".to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_timeout(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("'{}': {}", raw, e),
        })
}
