//! Data-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by article ingestion and listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("No article in the request could be saved")]
    NothingToSave,

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl DataError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DataError::ValidationFailed { .. } | DataError::NothingToSave => {
                ErrorCode::ValidationFailed
            }
            DataError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for DataError {
    fn from(err: ValidationError) -> Self {
        DataError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for DataError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => DataError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => DataError::Infrastructure(err.to_string()),
        }
    }
}
