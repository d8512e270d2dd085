//! Client configuration.

use std::path::Path;

use nauth_ledger::DEFAULT_API_URL;
use nauth_types::NativeAuthError;
use nauth_utils::{load_toml_file, parse_toml, ConfigError};
use serde::{Deserialize, Serialize};

/// Settings for issuing challenges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Relying-party host the tokens are meant for. Defaults to the local
    /// hostname from `$HOSTNAME` or `/etc/hostname`, else empty.
    #[serde(default = "default_host")]
    pub host: String,

    /// Base URL of the ledger API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Token validity window in seconds.
    #[serde(default = "default_expiry_seconds")]
    pub expiry_seconds: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    hostname_from(
        std::env::var("HOSTNAME").ok(),
        std::fs::read_to_string("/etc/hostname").ok(),
    )
}

/// First non-blank candidate, trimmed.
fn hostname_from(env: Option<String>, file: Option<String>) -> String {
    [env, file]
        .into_iter()
        .flatten()
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_default()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_expiry_seconds() -> u64 {
    60 * 60 * 24
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl ClientConfig {
    /// Defaults with an explicit host.
    pub fn for_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

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

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expiry_seconds == 0 {
            return Err(ConfigError::Invalid {
                field: "expiry_seconds",
                reason: "must be greater than zero".into(),
            });
        }
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api_url",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// [`validate`](Self::validate), with a zero expiry reported as a ttl error.
    pub(crate) fn check(&self) -> Result<(), NativeAuthError> {
        if self.expiry_seconds == 0 {
            return Err(NativeAuthError::InvalidTokenTtl {
                ttl: 0,
                reason: "expiry_seconds must be greater than zero".into(),
            });
        }
        self.validate().map_err(Into::into)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            api_url: default_api_url(),
            expiry_seconds: default_expiry_seconds(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
