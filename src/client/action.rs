//! Backend Actions
//!
//! The backend exposes a single endpoint; the request body carries an
//! `action` string selecting the behavior plus action-specific fields.
//! Modeled as an internally tagged enum so every request serializes to
//! exactly the wire shape the backend expects.

use serde::Serialize;

/// One request against the messaging endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    GetChats {
        user_id: i64,
    },
    GetContacts {
        user_id: i64,
    },
    GetMessages {
        chat_id: i64,
        user_id: i64,
    },
    SendMessage {
        chat_id: i64,
        sender_id: i64,
        text: String,
    },
    GetUserRating {
        user_id: i64,
    },
    CreateInvite {
        inviter_id: i64,
    },
    CreateChannel {
        name: String,
        description: String,
        avatar_emoji: String,
        creator_id: i64,
        is_channel: bool,
    },
    GetAllUsers,
    BlockUser {
        user_id: i64,
        blocked_by: i64,
        reason: String,
    },
    UnblockUser {
        user_id: i64,
    },
}

impl Action {
    /// The wire name of this action, for logging and error reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Action::GetChats { .. } => "get_chats",
            Action::GetContacts { .. } => "get_contacts",
            Action::GetMessages { .. } => "get_messages",
            Action::SendMessage { .. } => "send_message",
            Action::GetUserRating { .. } => "get_user_rating",
            Action::CreateInvite { .. } => "create_invite",
            Action::CreateChannel { .. } => "create_channel",
            Action::GetAllUsers => "get_all_users",
            Action::BlockUser { .. } => "block_user",
            Action::UnblockUser { .. } => "unblock_user",
        }
    }
}
