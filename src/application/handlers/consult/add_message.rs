//! AddMessageHandler - Command handler for appending a conversation turn.

use std::sync::Arc;

use crate::domain::consult::{ConsultError, Message, MessageRole};
use crate::domain::foundation::{SessionId, UserId};
use crate::ports::ConsultRepository;

/// Command to append one message to a consult.
#[derive(Debug, Clone)]
pub struct AddMessageCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub role: MessageRole,
    pub content: String,
}

/// Turn state after the append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMessageResult {
    pub session_id: SessionId,
    pub turn_count: usize,
    pub completed: bool,
}

/// Handler for appending messages.
pub struct AddMessageHandler {
    repository: Arc<dyn ConsultRepository>,
}

impl AddMessageHandler {
    pub fn new(repository: Arc<dyn ConsultRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, cmd), fields(session_id = %cmd.session_id, role = %cmd.role))]
    pub async fn handle(&self, cmd: AddMessageCommand) -> Result<AddMessageResult, ConsultError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| ConsultError::not_found(cmd.session_id))?;

        session.authorize(&cmd.user_id)?;

        let message = Message::new(cmd.role, cmd.content)?;
        session.add_message(message)?;

        let session = self.repository.save(&session).await?;

        tracing::debug!(
            turn_count = session.user_turn_count(),
            completed = session.is_completed(),
            "message appended"
        );

        Ok(AddMessageResult {
            session_id: *session.id(),
            turn_count: session.user_turn_count(),
            completed: session.is_completed(),
        })
    }
}
