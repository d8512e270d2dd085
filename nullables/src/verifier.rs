//! Nullable signature verifier.

use std::sync::Mutex;

use nauth_crypto::{CryptoError, SignatureVerifier};

#[derive(Clone, Copy, Debug)]
enum Outcome {
    Accept,
    Reject,
    Error,
}

/// A verifier with a fixed answer that records the messages it was asked
/// about.
pub struct FixedVerifier {
    outcome: Outcome,
    messages: Mutex<Vec<Vec<u8>>>,
}

impl FixedVerifier {
    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::with_outcome(Outcome::Accept)
    }

    pub fn rejecting() -> Self {
        Self::with_outcome(Outcome::Reject)
    }

    /// Behaves as if the signature could not be decoded.
    pub fn erroring() -> Self {
        Self::with_outcome(Outcome::Error)
    }

    /// Payloads passed to `verify`, in order.
    pub fn messages(&self) -> Vec<Vec<u8>> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl SignatureVerifier for FixedVerifier {
    fn verify(
        &self,
        message: &[u8],
        _signature_hex: &str,
        _address: &str,
    ) -> Result<bool, CryptoError> {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_vec());
        }
        match self.outcome {
            Outcome::Accept => Ok(true),
            Outcome::Reject => Ok(false),
            Outcome::Error => Err(CryptoError::InvalidSignature("fixed verifier error".into())),
        }
    }
}
