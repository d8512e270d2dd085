//! In-process cache with expiry.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;

use crate::{CacheError, CachePort};

struct Entry {
    value: Value,
    expires_at: Instant,
}

/// A [`CachePort`] backed by a mutex-guarded map. Expired entries are
/// dropped when they are read and swept from the whole map on every write.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Entry>>, CacheError> {
        self.entries
            .lock()
            .map_err(|e| CacheError::Backend(format!("lock poisoned: {e}")))
    }
}

#[async_trait]
impl CachePort for MemoryCache {
    async fn get_value(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let mut entries = self.lock()?;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_value(&self, key: &str, value: Value, ttl_secs: u64) -> Result<(), CacheError> {
        let mut entries = self.lock()?;
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);
        if ttl_secs == 0 {
            entries.remove(key);
            return Ok(());
        }
        let expires_at = now
            .checked_add(Duration::from_secs(ttl_secs))
            .unwrap_or_else(|| now + Duration::from_secs(u32::MAX as u64));
        entries.insert(key.to_string(), Entry { value, expires_at });
        Ok(())
    }
}
