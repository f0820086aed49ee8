//! Chat message model.

use serde::{Deserialize, Serialize};

/// Who authored a message, as understood by the Chat Completions API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    /// Wire name of the role (`"system"`, `"user"`, `"assistant"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in a conversation transcript.
///
/// Messages are immutable once created: there are no setters, and the
/// transcript only hands out shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    /// Authored by the end user.
    Human { content: String },
    /// Authored by the model, or the seeded greeting.
    Ai { content: String },
}

impl ChatMessage {
    pub fn human(content: impl Into<String>) -> Self {
        ChatMessage::Human {
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        ChatMessage::Ai {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            ChatMessage::Human { content } | ChatMessage::Ai { content } => content,
        }
    }

    /// Role this message takes when replayed to the model.
    pub fn role(&self) -> MessageRole {
        match self {
            ChatMessage::Human { .. } => MessageRole::User,
            ChatMessage::Ai { .. } => MessageRole::Assistant,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, ChatMessage::Human { .. })
    }
}
