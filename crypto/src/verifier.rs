//! The signature verification capability injected into the server.

use nauth_types::Signature;

use crate::address::decode_address;
use crate::sign::verify_signature;
use crate::CryptoError;

/// Checks that `signature_hex` signs `message` for the wallet at `address`.
///
/// Implementations return `Ok(false)` for a well-formed signature that does
/// not verify, and `Err` only when an input cannot be decoded at all.
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, message: &[u8], signature_hex: &str, address: &str)
        -> Result<bool, CryptoError>;
}

/// Ed25519 verification over the signable-message digest, keyed by `erd1` address.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Verifier;

impl Ed25519Verifier {
    pub fn new() -> Self {
        Self
    }
}

/// Decode a hex signature into its 64 raw bytes.
pub fn parse_signature_hex(signature_hex: &str) -> Result<Signature, CryptoError> {
    let bytes = hex::decode(signature_hex)
        .map_err(|e| CryptoError::InvalidSignature(format!("hex decode: {e}")))?;
    let arr: [u8; 64] = bytes.try_into().map_err(|v: Vec<u8>| {
        CryptoError::InvalidSignature(format!("expected 64 bytes, got {}", v.len()))
    })?;
    Ok(Signature(arr))
}

impl SignatureVerifier for Ed25519Verifier {
    fn verify(
        &self,
        message: &[u8],
        signature_hex: &str,
        address: &str,
    ) -> Result<bool, CryptoError> {
        let public_key = decode_address(address)?;
        let signature = parse_signature_hex(signature_hex)?;
        Ok(verify_signature(message, &signature, &public_key))
    }
}
