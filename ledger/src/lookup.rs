//! Cache-then-network block lookups.

use std::sync::Arc;

use nauth_store::CachePort;
use nauth_types::Timestamp;
use serde_json::Value;

use crate::{BlockRef, LedgerApi, LedgerError};

/// Block timestamps never change once the block exists.
pub const DEFAULT_BLOCK_CACHE_TTL_SECS: u64 = 600;
/// Roughly one round; the newest timestamp moves every few seconds.
pub const DEFAULT_LATEST_CACHE_TTL_SECS: u64 = 6;

/// Ledger lookups with an optional cache in front of the API.
///
/// Cache errors are logged and treated as misses, so a broken cache only
/// ever costs extra network calls.
#[derive(Clone)]
pub struct LedgerLookup {
    api: Arc<dyn LedgerApi>,
    cache: Option<Arc<dyn CachePort>>,
    block_cache_ttl: u64,
    latest_cache_ttl: u64,
}

impl LedgerLookup {
    pub fn new(api: Arc<dyn LedgerApi>) -> Self {
        Self {
            api,
            cache: None,
            block_cache_ttl: DEFAULT_BLOCK_CACHE_TTL_SECS,
            latest_cache_ttl: DEFAULT_LATEST_CACHE_TTL_SECS,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn CachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override how long block and latest timestamps stay cached.
    pub fn with_cache_ttls(mut self, block_secs: u64, latest_secs: u64) -> Self {
        self.block_cache_ttl = block_secs;
        self.latest_cache_ttl = latest_secs;
        self
    }

    pub fn with_api(mut self, api: Arc<dyn LedgerApi>) -> Self {
        self.api = api;
        self
    }

    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    /// Hash of the newest block. Always a network call.
    pub async fn latest_block_hash(&self) -> Result<String, LedgerError> {
        let hash = self.api.latest_block_hash().await?;
        tracing::debug!(block = %hash, "fetched latest block hash");
        Ok(hash)
    }

    /// Timestamp of a block, served from the cache when possible.
    pub async fn block_timestamp(&self, block: &BlockRef) -> Result<Timestamp, LedgerError> {
        let key = block.cache_key();

        if let Some(ts) = self.cached_timestamp(&key).await {
            tracing::debug!(block = %block, timestamp = ts, "block timestamp cache hit");
            return Ok(Timestamp::new(ts));
        }

        tracing::debug!(block = %block, "block timestamp cache miss, querying ledger API");
        let ts = match block {
            BlockRef::Hash(hash) => self.api.block_timestamp(hash).await?,
            BlockRef::Latest => self.api.latest_block_timestamp().await?,
        };

        let ttl = if block.is_latest() {
            self.latest_cache_ttl
        } else {
            self.block_cache_ttl
        };
        self.store_timestamp(&key, ts, ttl).await;

        Ok(Timestamp::new(ts))
    }

    async fn cached_timestamp(&self, key: &str) -> Option<u64> {
        let cache = self.cache.as_ref()?;
        match cache.get_value(key).await {
            Ok(Some(value)) => match value.as_u64() {
                Some(ts) => Some(ts),
                None => {
                    tracing::warn!(key, value = %value, "ignoring non-integer cached timestamp");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    async fn store_timestamp(&self, key: &str, ts: u64, ttl_secs: u64) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        if let Err(e) = cache.set_value(key, Value::from(ts), ttl_secs).await {
            tracing::warn!(key, error = %e, "cache write failed");
        }
    }
}

impl std::fmt::Debug for LedgerLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerLookup")
            .field("cache", &self.cache.is_some())
            .field("block_cache_ttl", &self.block_cache_ttl)
            .field("latest_cache_ttl", &self.latest_cache_ttl)
            .finish()
    }
}
