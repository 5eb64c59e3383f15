//! Converter-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while converting a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConverterError {
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Message converter error: {0}")]
    Converter(String),
}

impl ConverterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConverterError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ConverterError::Converter(_) => ErrorCode::AIProviderError,
        }
    }
}

impl From<ValidationError> for ConverterError {
    fn from(err: ValidationError) -> Self {
        ConverterError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
