//! The validation pipeline.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use nauth_crypto::{Ed25519Verifier, SignatureVerifier};
use nauth_ledger::{BlockRef, HttpLedgerApi, LedgerApi, LedgerLookup};
use nauth_protocol::{decode_access, signable_payload};
use nauth_store::CachePort;
use nauth_types::{DecodedToken, NativeAuthError, ValidationResult};

use crate::ServerConfig;

/// Validates access tokens. Holds only read-only state, so one instance can
/// serve any number of concurrent `validate` calls.
pub struct NativeAuthServer {
    config: ServerConfig,
    accepted_hosts: HashSet<String>,
    lookup: LedgerLookup,
    verifier: Arc<dyn SignatureVerifier>,
}

impl NativeAuthServer {
    /// Build a server that queries `config.api_url` over HTTP and verifies
    /// ed25519 wallet signatures. No cache until [`with_cache`](Self::with_cache).
    pub fn new(config: ServerConfig) -> Result<Self, NativeAuthError> {
        config.validate()?;
        let api = HttpLedgerApi::with_timeout(
            &config.api_url,
            Duration::from_secs(config.request_timeout_secs),
        );
        let lookup = LedgerLookup::new(Arc::new(api))
            .with_cache_ttls(config.block_cache_ttl_secs, config.latest_cache_ttl_secs);
        Ok(Self {
            accepted_hosts: config.accepted_hosts.iter().cloned().collect(),
            lookup,
            verifier: Arc::new(Ed25519Verifier::new()),
            config,
        })
    }

    pub fn with_cache(mut self, cache: Arc<dyn CachePort>) -> Self {
        self.lookup = self.lookup.with_cache(cache);
        self
    }

    pub fn with_ledger_api(mut self, api: Arc<dyn LedgerApi>) -> Self {
        self.lookup = self.lookup.with_api(api);
        self
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn SignatureVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Decode a token without checking anything. Never use the result for
    /// authorization.
    pub fn decode(&self, access_token: &str) -> Result<DecodedToken, NativeAuthError> {
        Ok(decode_access(access_token)?)
    }

    /// Run the full check. The first failing step decides the error.
    pub async fn validate(&self, access_token: &str) -> Result<ValidationResult, NativeAuthError> {
        match self.run(access_token).await {
            Ok(result) => {
                tracing::info!(
                    address = %result.address,
                    host = %result.host,
                    expires = %result.expires,
                    "access token validated"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "access token rejected");
                Err(e)
            }
        }
    }

    async fn run(&self, access_token: &str) -> Result<ValidationResult, NativeAuthError> {
        let decoded = self.decode(access_token)?;
        tracing::debug!(address = %decoded.address, host = %decoded.host, "decoded access token");

        self.check_host(&decoded)?;
        self.check_ttl(&decoded)?;

        let issued = self
            .lookup
            .block_timestamp(&BlockRef::hash(&decoded.block_hash))
            .await?;
        let expires = issued.plus(decoded.ttl);

        let latest = self.lookup.block_timestamp(&BlockRef::Latest).await?;
        tracing::debug!(issued = %issued, expires = %expires, latest = %latest, "resolved ledger time");
        if latest.as_secs() > expires.as_secs().saturating_add(self.config.timestamp_skew_secs) {
            return Err(NativeAuthError::TokenExpired {
                expires: expires.as_secs(),
                latest: latest.as_secs(),
            });
        }

        self.check_signature(&decoded)?;

        Ok(ValidationResult {
            address: decoded.address,
            host: decoded.host,
            issued,
            expires,
            extra_info: decoded.extra_info,
        })
    }

    fn check_host(&self, decoded: &DecodedToken) -> Result<(), NativeAuthError> {
        if !self.accepted_hosts.is_empty() && !self.accepted_hosts.contains(&decoded.host) {
            return Err(NativeAuthError::HostNotAccepted {
                host: decoded.host.clone(),
            });
        }
        Ok(())
    }

    fn check_ttl(&self, decoded: &DecodedToken) -> Result<(), NativeAuthError> {
        match self.config.max_expiry_seconds {
            Some(max) if decoded.ttl > max => Err(NativeAuthError::InvalidTokenTtl {
                ttl: decoded.ttl,
                reason: format!("exceeds the maximum of {max} seconds"),
            }),
            _ => Ok(()),
        }
    }

    fn check_signature(&self, decoded: &DecodedToken) -> Result<(), NativeAuthError> {
        let payload = signable_payload(&decoded.address, &decoded.body);
        if self.verifies(payload.as_bytes(), decoded)? {
            return Ok(());
        }
        if self.config.accept_unsuffixed_signatures {
            let bare = format!("{}{}", decoded.address, decoded.body);
            if self.verifies(bare.as_bytes(), decoded)? {
                tracing::debug!(address = %decoded.address, "signature matched unsuffixed payload");
                return Ok(());
            }
        }
        Err(NativeAuthError::InvalidSignature)
    }

    fn verifies(&self, message: &[u8], decoded: &DecodedToken) -> Result<bool, NativeAuthError> {
        self.verifier
            .verify(message, &decoded.signature, &decoded.address)
            .map_err(|e| {
                tracing::debug!(error = %e, "signature could not be checked");
                NativeAuthError::InvalidSignature
            })
    }
}

impl std::fmt::Debug for NativeAuthServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeAuthServer")
            .field("config", &self.config)
            .field("lookup", &self.lookup)
            .finish_non_exhaustive()
    }
}
