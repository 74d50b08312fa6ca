use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the storage, configuration, and ledger layers.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::StorageError(err.to_string())
    }
}
