//! Cache port trait and key layout.

use async_trait::async_trait;
use serde_json::Value;

use crate::CacheError;

/// Key under which the newest block's timestamp is cached.
pub const LATEST_TIMESTAMP_KEY: &str = "block:timestamp:latest";

/// Key under which a specific block's timestamp is cached.
pub fn block_timestamp_key(hash: &str) -> String {
    format!("block:timestamp:{hash}")
}

/// Key/value cache with per-entry time to live.
///
/// Callers treat every error as a miss, so implementations may fail freely.
#[async_trait]
pub trait CachePort: Send + Sync {
    async fn get_value(&self, key: &str) -> Result<Option<Value>, CacheError>;

    /// Store `value` for `ttl_secs` seconds. A ttl of zero stores nothing.
    async fn set_value(&self, key: &str, value: Value, ttl_secs: u64) -> Result<(), CacheError>;
}
