//! Configuration file for the command-line tool.
//!
//! ```toml
//! [client]
//! host = "dapp.example"
//! expiry_seconds = 3600
//!
//! [server]
//! accepted_hosts = ["dapp.example"]
//! ```

use std::path::Path;

use nauth_client::ClientConfig;
use nauth_server::ServerConfig;
use nauth_utils::{load_toml_file, ConfigError};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl CliConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let config: Self = load_toml_file(path)?;
        config.client.validate()?;
        config.server.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Point both sides at another ledger API.
    pub fn override_api_url(&mut self, api_url: &str) {
        self.client.api_url = api_url.to_string();
        self.server.api_url = api_url.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_path_means_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.client.expiry_seconds, 86400);
        assert!(config.server.accepted_hosts.is_empty());
    }

    #[test]
    fn loads_both_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[client]\nhost = \"dapp.example\"\nexpiry_seconds = 60\n\n[server]\naccepted_hosts = [\"dapp.example\"]"
        )
        .unwrap();
        let mut config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.client.host, "dapp.example");
        assert_eq!(config.client.expiry_seconds, 60);
        assert_eq!(config.server.accepted_hosts, vec!["dapp.example".to_string()]);

        config.override_api_url("http://localhost:3001");
        assert_eq!(config.client.api_url, "http://localhost:3001");
        assert_eq!(config.server.api_url, "http://localhost:3001");
    }

    #[test]
    fn invalid_section_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[client]\nexpiry_seconds = 0").unwrap();
        assert!(CliConfig::load(Some(file.path())).is_err());
    }
}
