//! Consult-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Consult-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultError {
    /// Session was not found.
    NotFound(SessionId),
    /// User does not own the session.
    Forbidden,
    /// Analysis requested before the turn threshold was met.
    IncompleteSession { turns: usize, required: usize },
    /// A user message was posted after the final turn.
    ConversationComplete,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Session was modified by another request since it was loaded.
    Conflict(SessionId),
    /// AI counselor did not answer in time.
    AnalysisTimedOut { timeout_secs: u64 },
    /// AI counselor failed.
    Counselor(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ConsultError {
    pub fn not_found(id: SessionId) -> Self {
        ConsultError::NotFound(id)
    }
    pub fn incomplete(turns: usize, required: usize) -> Self {
        ConsultError::IncompleteSession { turns, required }
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConsultError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn counselor(message: impl Into<String>) -> Self {
        ConsultError::Counselor(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ConsultError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ConsultError::NotFound(_) => ErrorCode::SessionNotFound,
            ConsultError::Forbidden => ErrorCode::Forbidden,
            ConsultError::IncompleteSession { .. } => ErrorCode::IncompleteSession,
            ConsultError::ConversationComplete => ErrorCode::ConversationComplete,
            ConsultError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ConsultError::Conflict(_) => ErrorCode::ConcurrentModification,
            ConsultError::AnalysisTimedOut { .. } => ErrorCode::AITimeout,
            ConsultError::Counselor(_) => ErrorCode::AIProviderError,
            ConsultError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ConsultError::NotFound(id) => format!("Consult session not found: {}", id),
            ConsultError::Forbidden => "Permission denied".to_string(),
            ConsultError::IncompleteSession { turns, required } => format!(
                "Consult is not complete yet: {} of {} turns taken",
                turns, required
            ),
            ConsultError::ConversationComplete => {
                "Consult already has all of its turns".to_string()
            }
            ConsultError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ConsultError::Conflict(id) => {
                format!("Consult session {} was modified concurrently", id)
            }
            ConsultError::AnalysisTimedOut { timeout_secs } => {
                format!("Analysis timed out after {}s", timeout_secs)
            }
            ConsultError::Counselor(msg) => format!("AI counselor error: {}", msg),
            ConsultError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ConsultError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConsultError {}

impl From<ValidationError> for ConsultError {
    fn from(err: ValidationError) -> Self {
        ConsultError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ConsultError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => ConsultError::Forbidden,
            ErrorCode::ConversationComplete => ConsultError::ConversationComplete,
            ErrorCode::ValidationFailed => ConsultError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::ConcurrentModification => match err
                .details
                .get("session_id")
                .and_then(|id| id.parse().ok())
            {
                Some(id) => ConsultError::Conflict(id),
                None => ConsultError::Infrastructure(err.to_string()),
            },
            _ => ConsultError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_session_message_mentions_turns() {
        let err = ConsultError::incomplete(2, 3);
        assert_eq!(err.code(), ErrorCode::IncompleteSession);
        assert!(err.to_string().contains("2 of 3"));
    }

    #[test]
    fn converts_forbidden_domain_error() {
        let err: ConsultError = DomainError::new(ErrorCode::Forbidden, "nope").into();
        assert_eq!(err, ConsultError::Forbidden);
    }

    #[test]
    fn converts_validation_domain_error_with_field() {
        let err: ConsultError = DomainError::validation("content", "empty").into();
        assert_eq!(
            err,
            ConsultError::ValidationFailed {
                field: "content".to_string(),
                message: "empty".to_string(),
            }
        );
    }

    #[test]
    fn converts_concurrent_modification_to_conflict() {
        let id = SessionId::new();
        let err: ConsultError = DomainError::new(ErrorCode::ConcurrentModification, "stale")
            .with_detail("session_id", id.to_string())
            .into();
        assert_eq!(err, ConsultError::Conflict(id));
    }

    #[test]
    fn database_errors_become_infrastructure() {
        let err: ConsultError = DomainError::database("connection reset").into();
        assert!(matches!(err, ConsultError::Infrastructure(_)));
    }
}
