//! Nullable ledger API with programmed blocks.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use nauth_ledger::{LedgerApi, LedgerError};

/// One request made against a [`NullLedgerApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerCall {
    LatestHash,
    LatestTimestamp,
    BlockTimestamp(String),
}

/// A ledger API that answers from memory.
///
/// Unknown block hashes answer `BlockNotFound`, like a 404. Asking for the
/// latest hash or timestamp before one is set answers HTTP 500.
#[derive(Default)]
pub struct NullLedgerApi {
    latest_hash: Mutex<Option<String>>,
    latest_timestamp: Mutex<Option<u64>>,
    blocks: Mutex<HashMap<String, u64>>,
    failure_status: Mutex<Option<u16>>,
    calls: Mutex<Vec<LedgerCall>>,
}

impl NullLedgerApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest_hash(self, hash: impl Into<String>) -> Self {
        self.set_latest_hash(hash);
        self
    }

    pub fn with_latest_timestamp(self, timestamp: u64) -> Self {
        self.set_latest_timestamp(timestamp);
        self
    }

    pub fn with_block(self, hash: impl Into<String>, timestamp: u64) -> Self {
        if let Ok(mut blocks) = self.blocks.lock() {
            blocks.insert(hash.into(), timestamp);
        }
        self
    }

    /// Make every request fail with the given HTTP status.
    pub fn failing_with_status(self, status: u16) -> Self {
        self.fail_with_status(Some(status));
        self
    }

    pub fn set_latest_hash(&self, hash: impl Into<String>) {
        if let Ok(mut slot) = self.latest_hash.lock() {
            *slot = Some(hash.into());
        }
    }

    pub fn set_latest_timestamp(&self, timestamp: u64) {
        if let Ok(mut slot) = self.latest_timestamp.lock() {
            *slot = Some(timestamp);
        }
    }

    /// `None` clears a previously programmed failure.
    pub fn fail_with_status(&self, status: Option<u16>) {
        if let Ok(mut slot) = self.failure_status.lock() {
            *slot = status;
        }
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<LedgerCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self, call: &LedgerCall) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls().len()
    }

    fn record(&self, call: LedgerCall, path: &str) -> Result<(), LedgerError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match self.failure_status.lock().ok().and_then(|s| *s) {
            Some(status) => Err(LedgerError::Http {
                status,
                url: format!("null://ledger{path}"),
            }),
            None => Ok(()),
        }
    }

    fn unset(path: &str) -> LedgerError {
        LedgerError::Http {
            status: 500,
            url: format!("null://ledger{path}"),
        }
    }
}

#[async_trait]
impl LedgerApi for NullLedgerApi {
    async fn latest_block_hash(&self) -> Result<String, LedgerError> {
        let path = "/blocks?size=1&fields=hash";
        self.record(LedgerCall::LatestHash, path)?;
        self.latest_hash
            .lock()
            .ok()
            .and_then(|h| h.clone())
            .ok_or_else(|| Self::unset(path))
    }

    async fn latest_block_timestamp(&self) -> Result<u64, LedgerError> {
        let path = "/blocks?size=1&fields=timestamp";
        self.record(LedgerCall::LatestTimestamp, path)?;
        self.latest_timestamp
            .lock()
            .ok()
            .and_then(|t| *t)
            .ok_or_else(|| Self::unset(path))
    }

    async fn block_timestamp(&self, hash: &str) -> Result<u64, LedgerError> {
        let path = format!("/blocks/{hash}?extract=timestamp");
        self.record(LedgerCall::BlockTimestamp(hash.to_string()), &path)?;
        self.blocks
            .lock()
            .ok()
            .and_then(|b| b.get(hash).copied())
            .ok_or_else(|| LedgerError::BlockNotFound(hash.to_string()))
    }
}
