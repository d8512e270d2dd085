//! Challenge issuance and token assembly.

use std::sync::Arc;
use std::time::Duration;

use nauth_ledger::{HttpLedgerApi, LedgerApi, LedgerLookup};
use nauth_protocol::{encode_access, encode_unsigned_token};
use nauth_types::{NativeAuthError, UnsignedToken};
use serde_json::Value;

use crate::ClientConfig;

/// Issues challenges anchored to the newest ledger block.
pub struct NativeAuthClient {
    config: ClientConfig,
    lookup: LedgerLookup,
}

impl NativeAuthClient {
    /// Build a client talking to `config.api_url` over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self, NativeAuthError> {
        config.check()?;
        let api = HttpLedgerApi::with_timeout(
            &config.api_url,
            Duration::from_secs(config.request_timeout_secs),
        );
        Ok(Self {
            lookup: LedgerLookup::new(Arc::new(api)),
            config,
        })
    }

    /// Swap the ledger transport.
    pub fn with_ledger_api(mut self, api: Arc<dyn LedgerApi>) -> Self {
        self.lookup = self.lookup.with_api(api);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Produce a challenge for the configured host and expiry.
    ///
    /// `None` means an empty extra-info object. One network call.
    pub async fn initialize(&self, extra_info: Option<Value>) -> Result<String, NativeAuthError> {
        let block_hash = self.lookup.latest_block_hash().await?;
        let token = UnsignedToken::new(
            self.config.host.clone(),
            block_hash,
            self.config.expiry_seconds,
            extra_info,
        )?;
        let challenge = encode_unsigned_token(&token);
        tracing::debug!(
            host = %token.host,
            block = %token.block_hash,
            ttl = token.ttl,
            "issued challenge"
        );
        Ok(challenge)
    }

    /// Assemble the access token. The signature must be over
    /// [`nauth_protocol::signable_payload`] of `address` and `challenge`.
    pub fn get_token(&self, address: &str, challenge: &str, signature_hex: &str) -> String {
        encode_access(address, challenge, signature_hex)
    }
}

impl std::fmt::Debug for NativeAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeAuthClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
