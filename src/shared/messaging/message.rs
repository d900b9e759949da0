//! Chat Message Data Structure
//!
//! Represents one message in a conversation. Message IDs are assigned by
//! the server on send; the client never synthesizes one.

use serde::{Deserialize, Serialize};

/// Which side of the conversation a message belongs to, as classified by
/// the server relative to the requesting user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Other,
}

/// A message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Server-assigned message ID
    pub id: i64,
    /// Message text
    pub text: String,
    /// Whose message this is, from the requesting user's perspective
    pub sender: Sender,
    /// Server-formatted send time ("14:32")
    pub time: String,
    /// Whether the message is end-to-end encrypted
    pub encrypted: bool,
}

impl Message {
    /// Get a preview of the message (first `max_len` characters).
    pub fn preview(&self, max_len: usize) -> String {
        if self.text.chars().count() <= max_len {
            self.text.clone()
        } else {
            let mut preview: String = self.text.chars().take(max_len.saturating_sub(3)).collect();
            preview.push_str("...");
            preview
        }
    }
}

/// Response envelope for `get_messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub messages: Option<Vec<Message>>,
}
