//! AI Counselor Port - produces the four-part relationship analysis.
//!
//! The consult module hands over the user's profile and the full transcript
//! and gets back an `Analysis`. Which model is called, and how the prompt is
//! shaped, stays inside the adapter.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::consult::{Analysis, MessageRecord};
use crate::domain::profile::UserProfile;

/// Port for generating a consult analysis.
#[async_trait]
pub trait AICounselor: Send + Sync {
    /// Analyze a finished conversation.
    ///
    /// `history` is in chronological order and includes assistant turns.
    async fn generate_analysis(
        &self,
        profile: &UserProfile,
        history: &[MessageRecord],
    ) -> Result<Analysis, AIError>;
}

/// Errors from AI-backed ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AIError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    /// The provider answered, but not in the shape we asked for.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl AIError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if a retry may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AIError::RateLimited { .. }
                | AIError::Unavailable { .. }
                | AIError::Network(_)
                | AIError::Timeout { .. }
        )
    }
}
