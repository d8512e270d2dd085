//! Server side of native auth.
//!
//! [`NativeAuthServer::validate`] runs a token through decode, host policy,
//! ttl policy, anchor lookup, freshness and signature checks, stopping at
//! the first failure. Nothing is persisted between calls.

pub mod config;
pub mod server;

pub use config::ServerConfig;
pub use server::NativeAuthServer;
