//! Server configuration.

use std::path::Path;

use nauth_ledger::{DEFAULT_API_URL, DEFAULT_BLOCK_CACHE_TTL_SECS, DEFAULT_LATEST_CACHE_TTL_SECS};
use nauth_utils::{load_toml_file, parse_toml, ConfigError};
use serde::{Deserialize, Serialize};

/// Settings for validating tokens.
///
/// The cache is not part of this; attach one with
/// [`NativeAuthServer::with_cache`](crate::NativeAuthServer::with_cache).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the ledger API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Hosts tokens may be issued for. Empty accepts every host.
    #[serde(default)]
    pub accepted_hosts: Vec<String>,

    /// Longest ttl a token may carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expiry_seconds: Option<u64>,

    /// Grace period added to `issued + ttl` before a token counts as expired.
    #[serde(default)]
    pub timestamp_skew_secs: u64,

    #[serde(default = "default_block_cache_ttl_secs")]
    pub block_cache_ttl_secs: u64,

    #[serde(default = "default_latest_cache_ttl_secs")]
    pub latest_cache_ttl_secs: u64,

    /// Also accept signatures over the payload without the trailing `{}`.
    /// On by default because legacy wallets sign that form.
    #[serde(default = "default_true")]
    pub accept_unsuffixed_signatures: bool,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_block_cache_ttl_secs() -> u64 {
    DEFAULT_BLOCK_CACHE_TTL_SECS
}

fn default_latest_cache_ttl_secs() -> u64 {
    DEFAULT_LATEST_CACHE_TTL_SECS
}

fn default_true() -> bool {
    true
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl ServerConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = load_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = parse_toml(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    pub fn with_accepted_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_expiry(mut self, seconds: u64) -> Self {
        self.max_expiry_seconds = Some(seconds);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api_url",
                reason: "must not be empty".into(),
            });
        }
        if self.max_expiry_seconds == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_expiry_seconds",
                reason: "must be greater than zero when set".into(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "request_timeout_secs",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            accepted_hosts: Vec::new(),
            max_expiry_seconds: None,
            timestamp_skew_secs: 0,
            block_cache_ttl_secs: default_block_cache_ttl_secs(),
            latest_cache_ttl_secs: default_latest_cache_ttl_secs(),
            accept_unsuffixed_signatures: default_true(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
