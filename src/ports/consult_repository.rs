//! Consult session repository port.
//!
//! Persists and retrieves `ConsultSession` aggregates. Writes are guarded by
//! the aggregate's `version` so two concurrent appends to the same session
//! cannot silently overwrite each other.

use crate::domain::consult::ConsultSession;
use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Repository port for ConsultSession persistence.
#[async_trait]
pub trait ConsultRepository: Send + Sync {
    /// Insert or update a session.
    ///
    /// The stored version must equal `session.version()`; a brand-new session
    /// carries version 0. Returns the session as stored, with its version
    /// bumped by one.
    ///
    /// # Errors
    ///
    /// - `ConcurrentModification` if the stored version moved on
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &ConsultSession) -> Result<ConsultSession, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ConsultSession>, DomainError>;
}
