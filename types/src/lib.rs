//! Fundamental types for native-auth.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the unsigned challenge, the decoded access token, the validation result,
//! ledger timestamps, ed25519 key material and the caller-visible error taxonomy.

pub mod error;
pub mod keys;
pub mod result;
pub mod time;
pub mod token;

pub use error::NativeAuthError;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use result::ValidationResult;
pub use time::Timestamp;
pub use token::{empty_extra_info, DecodedToken, UnsignedToken};
