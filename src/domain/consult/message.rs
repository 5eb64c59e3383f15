//! Conversation message value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Who authored a message in a consult conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// The person being coached. Each user message is one turn.
    User,
    /// The counselor's reply.
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("must be 'user' or 'assistant': {}", other),
            )),
        }
    }
}

/// One turn of conversation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MessageRecord", into = "MessageRecord")]
pub struct Message {
    role: MessageRole,
    content: String,
}

impl Message {
    /// Creates a message.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is empty
    pub fn new(role: MessageRole, content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(Self { role, content })
    }

    /// Creates a message from an untyped role string.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if role is not `user` or `assistant`
    /// - `EmptyField` if content is empty
    pub fn parse(role: &str, content: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(role.parse()?, content)
    }

    pub fn user(content: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }

    /// Plain `{role, content}` record, the shape handed to the AI counselor.
    pub fn to_record(&self) -> MessageRecord {
        MessageRecord {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// Serializable `{role, content}` form of a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub role: MessageRole,
    pub content: String,
}

impl TryFrom<MessageRecord> for Message {
    type Error = ValidationError;

    fn try_from(record: MessageRecord) -> Result<Self, Self::Error> {
        Message::new(record.role, record.content)
    }
}

impl From<Message> for MessageRecord {
    fn from(message: Message) -> Self {
        MessageRecord {
            role: message.role,
            content: message.content,
        }
    }
}
