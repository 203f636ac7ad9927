//! Ordered message history for the chat panel.
//!
//! DESIGN
//! ======
//! The transcript is append-only. The only other mutation is the reseed rule:
//! an empty transcript gets the canonical greeting back before it is rendered,
//! so the panel never shows a blank history.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier (UUID string), used as the list key.
    pub id: String,
    pub content: String,
    pub origin: Origin,
}

impl Message {
    /// Create a message with a fresh random id.
    pub fn new(origin: Origin, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), content: content.into(), origin }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Origin::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Origin::Assistant, content)
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}

/// Append-only message list in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Rebuild a transcript from a persisted record, keeping its order.
    #[must_use]
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Add a message after every existing one.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Insert the greeting if the transcript is empty.
    ///
    /// Returns `true` when a greeting was inserted. Calling this on a
    /// non-empty transcript is a no-op, so repeated calls never stack greetings.
    pub fn reseed_if_empty(&mut self, greeting: &str) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.messages.push(Message::assistant(greeting));
        true
    }
}
