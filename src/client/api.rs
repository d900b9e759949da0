//! Messaging API Client
//!
//! Every user intent becomes one POST to the messaging endpoint with a
//! JSON body tagged by `action`. Success is judged by the presence of
//! the expected key in the parsed body, not by HTTP status: the backend
//! reports logical failures as JSON bodies too, and those simply lack
//! the payload key. Calls are fire-and-forget; there is no retry.

use crate::client::action::Action;
use crate::shared::config::{AppConfig, ConfigError};
use crate::shared::error::ApiError;
use crate::shared::messaging::{
    AckResponse, Chat, ChatsResponse, Contact, ContactsResponse, InviteResponse, Message,
    MessagesResponse, User, UserRating, UsersResponse,
};
use reqwest::Client;

/// Client for the single messaging endpoint.
#[derive(Debug, Clone)]
pub struct MessagingApi {
    http: Client,
    endpoint: String,
}

impl MessagingApi {
    /// Build a client from configuration.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_endpoint(config.messages_url()?))
    }

    /// Build a client against an explicit endpoint URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one action and parse the body as JSON.
    async fn call(&self, action: &Action) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(action = action.name(), "calling messaging endpoint");
        let response = self.http.post(&self.endpoint).json(action).send().await?;
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// Ack-shaped mutations succeed only on an explicit `success: true`.
    async fn call_ack(&self, action: Action) -> Result<(), ApiError> {
        let name = action.name();
        let value = self.call(&action).await?;
        let ack: AckResponse = serde_json::from_value(value)?;
        match ack.success {
            Some(true) => Ok(()),
            Some(false) => Err(ApiError::rejected(name)),
            None => Err(ApiError::missing("success")),
        }
    }

    /// Fetch the chat list for a user. The returned order is the display
    /// order; the client never re-sorts it.
    pub async fn get_chats(&self, user_id: i64) -> Result<Vec<Chat>, ApiError> {
        let value = self.call(&Action::GetChats { user_id }).await?;
        let parsed: ChatsResponse = serde_json::from_value(value)?;
        parsed.chats.ok_or(ApiError::missing("chats"))
    }

    /// Fetch the contact list for a user.
    pub async fn get_contacts(&self, user_id: i64) -> Result<Vec<Contact>, ApiError> {
        let value = self.call(&Action::GetContacts { user_id }).await?;
        let parsed: ContactsResponse = serde_json::from_value(value)?;
        parsed.contacts.ok_or(ApiError::missing("contacts"))
    }

    /// Fetch all messages of one chat, classified relative to `user_id`.
    pub async fn get_messages(&self, chat_id: i64, user_id: i64) -> Result<Vec<Message>, ApiError> {
        let value = self.call(&Action::GetMessages { chat_id, user_id }).await?;
        let parsed: MessagesResponse = serde_json::from_value(value)?;
        parsed.messages.ok_or(ApiError::missing("messages"))
    }

    /// Send a message. The server responds with the canonical message
    /// object; a non-null `id` is the success signal.
    pub async fn send_message(
        &self,
        chat_id: i64,
        sender_id: i64,
        text: String,
    ) -> Result<Message, ApiError> {
        let value = self
            .call(&Action::SendMessage {
                chat_id,
                sender_id,
                text,
            })
            .await?;
        if value.get("id").map_or(true, serde_json::Value::is_null) {
            return Err(ApiError::missing("id"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch the activity rating for a user. This response is the rating
    /// object itself, with no envelope around it.
    pub async fn get_user_rating(&self, user_id: i64) -> Result<UserRating, ApiError> {
        let value = self.call(&Action::GetUserRating { user_id }).await?;
        if value.get("ratingScore").is_none() {
            return Err(ApiError::missing("ratingScore"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Create a friend invite and return the generated code.
    pub async fn create_invite(&self, inviter_id: i64) -> Result<String, ApiError> {
        let value = self.call(&Action::CreateInvite { inviter_id }).await?;
        let parsed: InviteResponse = serde_json::from_value(value)?;
        parsed.invite_code.ok_or(ApiError::missing("inviteCode"))
    }

    /// Create a channel. Success means the channel exists server-side;
    /// the caller is expected to reload the chat list afterwards.
    pub async fn create_channel(
        &self,
        name: String,
        description: String,
        avatar_emoji: String,
        creator_id: i64,
    ) -> Result<(), ApiError> {
        self.call_ack(Action::CreateChannel {
            name,
            description,
            avatar_emoji,
            creator_id,
            is_channel: true,
        })
        .await
    }

    /// Fetch every registered user, for the admin dashboard.
    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        let value = self.call(&Action::GetAllUsers).await?;
        let parsed: UsersResponse = serde_json::from_value(value)?;
        parsed.users.ok_or(ApiError::missing("users"))
    }

    /// Block a user. Callers must apply the admin guard before calling.
    pub async fn block_user(
        &self,
        user_id: i64,
        blocked_by: i64,
        reason: String,
    ) -> Result<(), ApiError> {
        self.call_ack(Action::BlockUser {
            user_id,
            blocked_by,
            reason,
        })
        .await
    }

    /// Lift an active block. Unblocking an already-unblocked user is a
    /// server-side no-op that still reports success.
    pub async fn unblock_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.call_ack(Action::UnblockUser { user_id }).await
    }
}
