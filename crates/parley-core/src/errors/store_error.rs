//! QA store mutation errors.

use super::error_code::{self, ParleyErrorCode};

/// Errors surfaced by `QaStore::append` and explicit persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{field} must not be empty")]
    Validation { field: String },

    #[error("question already exists: {question}")]
    Duplicate { question: String },

    #[error("failed to persist store to {path}: {message}")]
    Persistence { path: String, message: String },
}

impl ParleyErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::Duplicate { .. } => error_code::DUPLICATE_QUESTION,
            Self::Persistence { .. } => error_code::PERSISTENCE_ERROR,
        }
    }
}
