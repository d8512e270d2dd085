//! Block lookups against the ledger API.
//!
//! [`LedgerApi`] is the raw transport (one request per call, no caching).
//! [`LedgerLookup`] puts the cache port in front of it and is what the
//! client and server actually use.

pub mod api;
pub mod error;
pub mod http;
pub mod lookup;

pub use api::{BlockRef, LedgerApi};
pub use error::LedgerError;
pub use http::{HttpLedgerApi, DEFAULT_API_URL};
pub use lookup::{LedgerLookup, DEFAULT_BLOCK_CACHE_TTL_SECS, DEFAULT_LATEST_CACHE_TTL_SECS};
