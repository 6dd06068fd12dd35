//! Stylist conversation: messages, transcript, replies.

use super::entities::Outfit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of prior messages sent to the model as context.
pub const CHAT_CONTEXT_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outfit: Option<Outfit>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
            outfit: None,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn from_reply(reply: ChatReply) -> Self {
        Self {
            outfit: reply.outfit,
            ..Self::new(Role::Model, reply.text)
        }
    }
}

/// Result of one chat turn: prose plus an optional structured look.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatReply {
    pub text: String,
    pub outfit: Option<Outfit>,
}

impl ChatReply {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outfit: None,
        }
    }
}

/// Append-only conversation log.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the stylist's greeting.
    pub fn with_greeting(name: &str) -> Self {
        let mut t = Self::new();
        t.push(ChatMessage::new(
            Role::Model,
            format!(
                "Hi {}! I'm Ixora. Tell me where you're headed and I'll help you put a look together.",
                name
            ),
        ));
        t
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The last `CHAT_CONTEXT_WINDOW` messages of `history`, oldest first.
pub fn context_window(history: &[ChatMessage]) -> &[ChatMessage] {
    let start = history.len().saturating_sub(CHAT_CONTEXT_WINDOW);
    &history[start..]
}
