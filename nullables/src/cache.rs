//! Nullable cache that records traffic.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use nauth_store::{CacheError, CachePort};
use serde_json::Value;

/// An in-memory cache without expiry that remembers every read and write.
///
/// Can be switched into a failure mode where every call errors.
#[derive(Default)]
pub struct NullCache {
    entries: Mutex<HashMap<String, Value>>,
    reads: Mutex<Vec<String>>,
    writes: Mutex<Vec<(String, Value, u64)>>,
    failing: AtomicBool,
}

impl NullCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        self
    }

    /// Every get and set returns an error.
    pub fn failing() -> Self {
        let cache = Self::default();
        cache.failing.store(true, Ordering::SeqCst);
        cache
    }

    /// Keys read so far, in order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// `(key, value, ttl_secs)` for every write so far, in order.
    pub fn writes(&self) -> Vec<(String, Value, u64)> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    pub fn peek(&self, key: &str) -> Option<Value> {
        self.entries.lock().ok().and_then(|e| e.get(key).cloned())
    }

    fn check(&self) -> Result<(), CacheError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(CacheError::Backend("null cache set to fail".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CachePort for NullCache {
    async fn get_value(&self, key: &str) -> Result<Option<Value>, CacheError> {
        if let Ok(mut reads) = self.reads.lock() {
            reads.push(key.to_string());
        }
        self.check()?;
        Ok(self.peek(key))
    }

    async fn set_value(&self, key: &str, value: Value, ttl_secs: u64) -> Result<(), CacheError> {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push((key.to_string(), value.clone(), ttl_secs));
        }
        self.check()?;
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
        Ok(())
    }
}
