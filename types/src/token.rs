//! Token representations on both sides of the signing step.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::NativeAuthError;

/// The empty extra-info object (`{}`), the default when a caller has none.
pub fn empty_extra_info() -> Value {
    Value::Object(Map::new())
}

/// The challenge a client hands to the key holder for signing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnsignedToken {
    /// Relying-party domain the token is meant for.
    pub host: String,
    /// Hex hash of the anchor block.
    pub block_hash: String,
    /// Validity window in seconds of ledger time.
    pub ttl: u64,
    /// Opaque caller data carried alongside the claims.
    #[serde(default = "empty_extra_info")]
    pub extra_info: Value,
}

impl UnsignedToken {
    /// Build a challenge, rejecting a zero ttl.
    pub fn new(
        host: impl Into<String>,
        block_hash: impl Into<String>,
        ttl: u64,
        extra_info: Option<Value>,
    ) -> Result<Self, NativeAuthError> {
        if ttl == 0 {
            return Err(NativeAuthError::InvalidTokenTtl {
                ttl,
                reason: "ttl must be greater than zero".into(),
            });
        }
        Ok(Self {
            host: host.into(),
            block_hash: block_hash.into(),
            ttl,
            extra_info: extra_info.unwrap_or_else(empty_extra_info),
        })
    }
}

/// Claims extracted from an access token without any verification.
///
/// `body` is the exact unsigned-token string as it appeared on the wire.
/// It is never rebuilt from the other fields, since any reformatting would
/// break the signature check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecodedToken {
    pub address: String,
    pub host: String,
    pub block_hash: String,
    pub ttl: u64,
    pub extra_info: Value,
    pub signature: String,
    pub body: String,
}

impl DecodedToken {
    /// Whether the token carries any extra info beyond the empty object.
    pub fn has_extra_info(&self) -> bool {
        match &self.extra_info {
            Value::Object(map) => !map.is_empty(),
            Value::Null => false,
            _ => true,
        }
    }
}
