use nauth_types::NativeAuthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("block {0} not found")]
    BlockNotFound(String),

    #[error("ledger API returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("ledger API unreachable: {0}")]
    Transport(String),

    #[error("unexpected ledger API response: {0}")]
    InvalidResponse(String),
}

impl From<LedgerError> for NativeAuthError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::BlockNotFound(hash) => NativeAuthError::InvalidBlockHash { hash },
            other => NativeAuthError::Upstream(other.to_string()),
        }
    }
}
