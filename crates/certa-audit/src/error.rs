use certa_core::error::ReviewError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("storage error: {0}")]
    Storage(#[from] certa_storage::error::StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AuditError> for ReviewError {
    fn from(e: AuditError) -> Self {
        ReviewError::PersistenceWriteFailure(e.to_string())
    }
}
