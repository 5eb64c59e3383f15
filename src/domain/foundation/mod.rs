//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, auth and error types that form the
//! vocabulary shared by the consult, converter and data modules.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ArticleId, KeywordId, SessionId, UserId};
pub use timestamp::Timestamp;
