//! The ledger API port.

use async_trait::async_trait;
use nauth_store::{block_timestamp_key, LATEST_TIMESTAMP_KEY};

use crate::LedgerError;

/// Raw access to the three ledger endpoints the protocol needs.
///
/// Implementations perform exactly one upstream request per call and never
/// retry. A missing block must surface as [`LedgerError::BlockNotFound`].
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Hash of the newest block.
    async fn latest_block_hash(&self) -> Result<String, LedgerError>;

    /// Timestamp (unix seconds) of the newest block.
    async fn latest_block_timestamp(&self) -> Result<u64, LedgerError>;

    /// Timestamp (unix seconds) of the block with the given hash.
    async fn block_timestamp(&self, hash: &str) -> Result<u64, LedgerError>;
}

/// Which block's timestamp to look up.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockRef {
    Hash(String),
    Latest,
}

impl BlockRef {
    pub fn hash(hash: impl Into<String>) -> Self {
        BlockRef::Hash(hash.into())
    }

    pub fn cache_key(&self) -> String {
        match self {
            BlockRef::Hash(hash) => block_timestamp_key(hash),
            BlockRef::Latest => LATEST_TIMESTAMP_KEY.to_string(),
        }
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, BlockRef::Latest)
    }
}

impl std::fmt::Display for BlockRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockRef::Hash(hash) => f.write_str(hash),
            BlockRef::Latest => f.write_str("latest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_keys() {
        assert_eq!(BlockRef::hash("ab12").cache_key(), "block:timestamp:ab12");
        assert_eq!(BlockRef::Latest.cache_key(), "block:timestamp:latest");
    }

    #[test]
    fn display() {
        assert_eq!(BlockRef::Latest.to_string(), "latest");
        assert_eq!(BlockRef::hash("ff").to_string(), "ff");
        assert!(BlockRef::Latest.is_latest());
        assert!(!BlockRef::hash("ff").is_latest());
    }
}
