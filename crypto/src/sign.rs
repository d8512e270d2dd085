//! Ed25519 signing and verification of off-chain messages.
//!
//! Messages are never signed raw: both sides sign/verify the
//! [`signable_message_digest`] so signatures match what wallets produce.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use nauth_types::{PrivateKey, PublicKey, Signature};

use crate::hash::signable_message_digest;

/// Sign an off-chain message with a private key.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    let digest = signable_message_digest(message);
    Signature(signing_key.sign(&digest).to_bytes())
}

/// Verify a signature over an off-chain message.
///
/// Returns `false` for invalid public keys as well as bad signatures.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    let digest = signable_message_digest(message);
    verifying_key.verify(&digest, &dalek_sig).is_ok()
}
