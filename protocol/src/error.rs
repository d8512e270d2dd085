use nauth_types::NativeAuthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{part} must have {expected} segments, found {found}")]
    SegmentCount {
        part: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{segment} is not valid base64: {reason}")]
    Base64 {
        segment: &'static str,
        reason: String,
    },

    #[error("{segment} is not valid UTF-8")]
    Utf8 { segment: &'static str },

    #[error("extra info is not valid JSON: {0}")]
    Json(String),

    #[error("ttl {0:?} is not a non-negative integer")]
    InvalidTtl(String),

    #[error("block hash {0:?} is not hex")]
    InvalidBlockHash(String),
}

impl From<CodecError> for NativeAuthError {
    fn from(e: CodecError) -> Self {
        NativeAuthError::MalformedToken(e.to_string())
    }
}
