//! Caller-visible error taxonomy.

use thiserror::Error;

/// Every way issuing or validating an access token can fail.
///
/// Each variant is a distinct kind so callers can tell a malformed token
/// from a stale one, and both from a ledger that could not be reached.
#[derive(Debug, Error)]
pub enum NativeAuthError {
    /// Wrong segment count, bad base64 or UTF-8, invalid extra-info JSON,
    /// a non-digit ttl, or an empty or non-hex block hash. A hex hash the
    /// ledger does not know is [`InvalidBlockHash`](Self::InvalidBlockHash).
    #[error("malformed access token: {0}")]
    MalformedToken(String),

    #[error("host {host} is not accepted")]
    HostNotAccepted { host: String },

    #[error("invalid token ttl {ttl}: {reason}")]
    InvalidTokenTtl { ttl: u64, reason: String },

    #[error("block hash {hash} not found on the ledger")]
    InvalidBlockHash { hash: String },

    #[error("token expired at {expires}, latest block timestamp is {latest}")]
    TokenExpired { expires: u64, latest: u64 },

    #[error("invalid signature")]
    InvalidSignature,

    #[error("ledger API request failed: {0}")]
    Upstream(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl NativeAuthError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedToken(_) => "malformed_token",
            Self::HostNotAccepted { .. } => "host_not_accepted",
            Self::InvalidTokenTtl { .. } => "invalid_token_ttl",
            Self::InvalidBlockHash { .. } => "invalid_block_hash",
            Self::TokenExpired { .. } => "token_expired",
            Self::InvalidSignature => "invalid_signature",
            Self::Upstream(_) => "upstream_transport",
            Self::Config(_) => "config",
        }
    }
}
