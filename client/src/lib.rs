//! Client side of native auth: fetch a fresh block hash, hand out the
//! challenge for signing, and glue the signature onto it.

pub mod client;
pub mod config;

pub use client::NativeAuthClient;
pub use config::ClientConfig;
