//! ConsultSession aggregate.
//!
//! A consult session is created with a profile and accumulates messages.
//! Completion is derived from the message history on every call and is
//! never stored.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp, UserId};
use crate::domain::profile::UserProfile;

use super::{Message, MessageRecord};

/// Number of user turns after which a session is complete.
pub const REQUIRED_USER_TURNS: usize = 3;

/// Derived lifecycle state of a consult session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultStatus {
    /// Fewer than [`REQUIRED_USER_TURNS`] user turns recorded.
    Open,
    /// Enough user turns recorded; analysis is unlocked.
    Completed,
}

impl fmt::Display for ConsultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConsultStatus::Open => "Open",
            ConsultStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

/// Consult session aggregate root.
///
/// # Invariants
///
/// - `messages` is append-only and keeps insertion order
/// - at most [`REQUIRED_USER_TURNS`] user messages
/// - `created_at` never changes
/// - `version` is the persisted revision (0 = never saved)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultSession {
    id: SessionId,
    user_id: UserId,
    profile: UserProfile,
    messages: Vec<Message>,
    created_at: Timestamp,
    version: u64,
}

impl ConsultSession {
    /// Creates an open session with no messages.
    pub fn new(id: SessionId, user_id: UserId, profile: UserProfile) -> Self {
        Self {
            id,
            user_id,
            profile,
            messages: Vec::new(),
            created_at: Timestamp::now(),
            version: 0,
        }
    }

    /// Creates an open session with a freshly generated id.
    pub fn start(user_id: UserId, profile: UserProfile) -> Self {
        Self::new(SessionId::new(), user_id, profile)
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        user_id: UserId,
        profile: UserProfile,
        messages: Vec<Message>,
        created_at: Timestamp,
        version: u64,
    ) -> Self {
        Self {
            id,
            user_id,
            profile,
            messages,
            created_at,
            version,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Copy of this session at the next persisted revision.
    ///
    /// Called by repositories after a successful write.
    pub fn with_next_version(&self) -> Self {
        Self {
            version: self.version + 1,
            ..self.clone()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Turn counting
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of user-authored messages.
    pub fn user_turn_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_user()).count()
    }

    /// True once the user has taken [`REQUIRED_USER_TURNS`] turns.
    pub fn is_completed(&self) -> bool {
        self.user_turn_count() >= REQUIRED_USER_TURNS
    }

    pub fn status(&self) -> ConsultStatus {
        if self.is_completed() {
            ConsultStatus::Completed
        } else {
            ConsultStatus::Open
        }
    }

    /// Ordered `{role, content}` records, one per message.
    pub fn conversation_history(&self) -> Vec<MessageRecord> {
        self.messages.iter().map(Message::to_record).collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Validates that the user can act on this session.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if user is not the owner
    pub fn authorize(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User is not authorized to access this consult session",
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a message to the conversation.
    ///
    /// Assistant replies are always accepted so the answer to the final turn
    /// can be recorded.
    ///
    /// # Errors
    ///
    /// - `ConversationComplete` if a user message would exceed the turn limit
    pub fn add_message(&mut self, message: Message) -> Result<(), DomainError> {
        if message.is_user() && self.is_completed() {
            return Err(DomainError::new(
                ErrorCode::ConversationComplete,
                format!(
                    "Consult session {} already has {} user turns",
                    self.id, REQUIRED_USER_TURNS
                ),
            ));
        }

        self.messages.push(message);
        Ok(())
    }
}
