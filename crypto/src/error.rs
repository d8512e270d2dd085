use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid signature encoding: {0}")]
    InvalidSignature(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid PEM wallet: {0}")]
    InvalidPem(String),
}
