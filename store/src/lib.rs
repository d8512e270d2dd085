//! Cache port for ledger lookups.
//!
//! The server only ever talks to [`CachePort`]; the bundled [`MemoryCache`]
//! is enough for a single process, and anything shared (Redis and friends)
//! plugs in behind the same trait.

pub mod cache;
pub mod error;
pub mod memory;

pub use cache::{block_timestamp_key, CachePort, LATEST_TIMESTAMP_KEY};
pub use error::CacheError;
pub use memory::MemoryCache;
