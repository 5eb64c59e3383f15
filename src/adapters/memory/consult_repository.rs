//! In-memory consult session store with optimistic version checks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::consult::ConsultSession;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::ConsultRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryConsultRepository {
    sessions: Arc<RwLock<HashMap<SessionId, ConsultSession>>>,
}

impl InMemoryConsultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl ConsultRepository for InMemoryConsultRepository {
    async fn save(&self, session: &ConsultSession) -> Result<ConsultSession, DomainError> {
        let mut sessions = self.sessions.write().await;

        let stored_version = sessions.get(session.id()).map(ConsultSession::version).unwrap_or(0);
        if stored_version != session.version() {
            return Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!(
                    "Consult session {} is at version {}, write was based on {}",
                    session.id(),
                    stored_version,
                    session.version()
                ),
            )
            .with_detail("session_id", session.id().to_string()));
        }

        let saved = session.with_next_version();
        sessions.insert(*saved.id(), saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ConsultSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }
}
