//! StartConsultHandler - Command handler for opening a consult session.

use std::sync::Arc;

use crate::domain::consult::{ConsultError, ConsultSession};
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::profile::UserProfile;
use crate::ports::ConsultRepository;

/// Command to start a new consult.
#[derive(Debug, Clone)]
pub struct StartConsultCommand {
    pub user_id: UserId,
    pub profile: UserProfile,
}

/// Result of a started consult.
#[derive(Debug, Clone)]
pub struct StartConsultResult {
    pub session_id: SessionId,
    pub session: ConsultSession,
}

/// Handler for starting consult sessions.
pub struct StartConsultHandler {
    repository: Arc<dyn ConsultRepository>,
}

impl StartConsultHandler {
    pub fn new(repository: Arc<dyn ConsultRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, cmd), fields(user_id = %cmd.user_id))]
    pub async fn handle(&self, cmd: StartConsultCommand) -> Result<StartConsultResult, ConsultError> {
        let session = ConsultSession::start(cmd.user_id, cmd.profile);
        let session = self.repository.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            mbti = %session.profile().mbti(),
            "consult session started"
        );

        Ok(StartConsultResult {
            session_id: *session.id(),
            session,
        })
    }
}
