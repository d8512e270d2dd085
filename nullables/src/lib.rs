//! Nullable infrastructure for deterministic testing.
//!
//! Everything the server and client reach out to (the ledger API, the cache,
//! the signature verifier) sits behind a trait. The implementations here:
//! - Return programmed values
//! - Record every call for assertions
//! - Never touch the network
//!
//! Usage: hand them to `with_ledger_api` / `with_cache` / `with_verifier`.

pub mod cache;
pub mod ledger;
pub mod verifier;

pub use cache::NullCache;
pub use ledger::{LedgerCall, NullLedgerApi};
pub use verifier::FixedVerifier;
