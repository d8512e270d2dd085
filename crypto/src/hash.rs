//! Keccak-256 hashing and the signable-message digest.

use sha3::{Digest, Keccak256};

/// Prefix wallets prepend to every off-chain message before hashing it.
pub const MESSAGE_PREFIX: &[u8] = b"\x17Elrond Signed Message:\n";

/// Compute Keccak-256 (the pre-standard SHA-3 padding) of the input.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// The 32-byte digest that is actually signed for an off-chain message:
/// `keccak256(prefix || decimal(len(message)) || message)`.
pub fn signable_message_digest(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(MESSAGE_PREFIX);
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}
