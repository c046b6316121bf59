use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Corrupt product metadata: {0}")]
    Corrupt(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        let message = error.to_string();
        match error {
            StorageError::NotFound(_) => ApplicationError::NotFound(message),
            StorageError::Corrupt(_) => ApplicationError::Corrupt(message),
            StorageError::Io(_) => ApplicationError::InternalError(message),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            StorageError::Io(error.to_string())
        } else {
            StorageError::Corrupt(error.to_string())
        }
    }
}
