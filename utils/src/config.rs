//! TOML configuration loading shared by the client, server and CLI.

use std::path::Path;

use nauth_types::NativeAuthError;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<ConfigError> for NativeAuthError {
    fn from(e: ConfigError) -> Self {
        NativeAuthError::Config(e.to_string())
    }
}

/// Parse a TOML document; missing keys fall back to serde defaults.
pub fn parse_toml<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Read and parse a TOML file.
pub fn load_toml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_toml(&content)
}
