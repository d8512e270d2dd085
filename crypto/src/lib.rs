//! Wallet cryptography for native-auth.
//!
//! - **Ed25519** for signing and signature verification
//! - **Keccak-256** signable-message digest (`\x17Elrond Signed Message:\n` prefix)
//! - Bech32 `erd1` addresses carrying the 32-byte public key
//! - PEM wallet files as produced by MultiversX tooling
//! - [`SignatureVerifier`], the capability the server is injected with

pub mod address;
pub mod error;
pub mod hash;
pub mod keys;
pub mod pem;
pub mod sign;
pub mod verifier;

pub use address::{decode_address, encode_address, validate_address};
pub use error::CryptoError;
pub use hash::{keccak256, signable_message_digest};
pub use keys::{keypair_from_seed, public_from_private};
pub use pem::{parse_pem, PemWallet};
pub use sign::{sign_message, verify_signature};
pub use verifier::{parse_signature_hex, Ed25519Verifier, SignatureVerifier};
