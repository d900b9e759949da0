//! Chat List Entry
//!
//! One row of the chat list as the backend reports it. Ordering,
//! `last_message` preview, and the unread counter are all computed
//! server-side; the client mirrors them verbatim.

use serde::{Deserialize, Serialize};

/// A chat (direct conversation, group, or channel) in the chat list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Server-assigned chat ID
    pub id: i64,
    /// Chat display name
    pub name: String,
    /// Preview of the most recent message
    pub last_message: String,
    /// Server-formatted timestamp of the last message ("14:32", "Вчера", "03.05")
    pub time: String,
    /// Unread message count, server-computed
    pub unread: u32,
    /// Avatar emoji
    pub avatar: String,
    /// Whether the other party is currently online
    pub online: bool,
}

/// Response envelope for `get_chats`. A body without the `chats` key is
/// valid JSON but carries no data.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatsResponse {
    pub chats: Option<Vec<Chat>>,
}

/// Draft of a new channel, collected by the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelDraft {
    pub name: String,
    pub description: String,
    pub avatar_emoji: String,
}

impl ChannelDraft {
    /// A draft is submittable once it has a non-blank name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
