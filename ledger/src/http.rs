//! reqwest-backed ledger API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{LedgerApi, LedgerError};

/// Public MultiversX mainnet API.
pub const DEFAULT_API_URL: &str = "https://api.multiversx.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct HashField {
    hash: String,
}

#[derive(Debug, Deserialize)]
struct TimestampField {
    timestamp: u64,
}

/// Talks to a MultiversX-style REST API:
///
/// - `GET {api}/blocks?size=1&fields=hash` -> `[{"hash": "..."}]`
/// - `GET {api}/blocks?size=1&fields=timestamp` -> `[{"timestamp": 123}]`
/// - `GET {api}/blocks/{hash}?extract=timestamp` -> `123`, or 404
#[derive(Clone, Debug)]
pub struct HttpLedgerApi {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpLedgerApi {
    pub fn new(api_url: &str) -> Self {
        Self::with_timeout(api_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_url: &str, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
            .build()
            .unwrap_or_default();
        Self {
            base_url: api_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, LedgerError> {
        self.http_client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                LedgerError::Transport(format!("request timed out: {e}"))
            } else if e.is_connect() {
                LedgerError::Transport(format!("connection failed: {e}"))
            } else {
                LedgerError::Transport(e.to_string())
            }
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LedgerError> {
        let response = self.get(url).await?;
        if !response.status().is_success() {
            return Err(LedgerError::Http {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| LedgerError::InvalidResponse(format!("{url}: {e}")))
    }

    async fn latest_block_field<T: DeserializeOwned>(&self, field: &str) -> Result<T, LedgerError> {
        let url = format!("{}/blocks?size=1&fields={field}", self.base_url);
        let mut blocks: Vec<T> = self.get_json(&url).await?;
        if blocks.is_empty() {
            return Err(LedgerError::InvalidResponse(format!("{url}: no blocks returned")));
        }
        Ok(blocks.swap_remove(0))
    }
}

impl Default for HttpLedgerApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl LedgerApi for HttpLedgerApi {
    async fn latest_block_hash(&self) -> Result<String, LedgerError> {
        let block: HashField = self.latest_block_field("hash").await?;
        Ok(block.hash)
    }

    async fn latest_block_timestamp(&self) -> Result<u64, LedgerError> {
        let block: TimestampField = self.latest_block_field("timestamp").await?;
        Ok(block.timestamp)
    }

    async fn block_timestamp(&self, hash: &str) -> Result<u64, LedgerError> {
        let url = format!("{}/blocks/{hash}?extract=timestamp", self.base_url);
        let response = self.get(&url).await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LedgerError::BlockNotFound(hash.to_string()));
        }
        if !status.is_success() {
            return Err(LedgerError::Http {
                status: status.as_u16(),
                url,
            });
        }
        let body = response
            .text()
            .await
            .map_err(|e| LedgerError::Transport(e.to_string()))?;
        body.trim()
            .parse()
            .map_err(|_| LedgerError::InvalidResponse(format!("{url}: expected an integer, got {body:?}")))
    }
}
