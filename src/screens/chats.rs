//! Chats Screen
//!
//! Owns the chat list, the active conversation, the message draft, and
//! the channel-creation form.
//!
//! Two disciplines live here:
//!
//! - **Optimistic-after-confirm send**: a sent message is appended only
//!   once the server returns its canonical object (non-null `id`), then
//!   the chat list is re-fetched so ordering, previews, and unread
//!   counters catch up. Nothing is appended before confirmation, so no
//!   rollback path is needed.
//! - **Generation-tagged message loads**: selecting a chat bumps a
//!   generation counter, and every in-flight load carries the generation
//!   it was issued under. A response tagged with an older generation is
//!   discarded, so rapid chat switching can never let a late response
//!   overwrite the newer chat's messages.

use crate::client::MessagingApi;
use crate::screens::{LoadPhase, Session};
use crate::shared::messaging::{ChannelDraft, Chat, Message};
use crate::shared::ApiError;

/// Ticket for one in-flight message load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLoad {
    /// Chat the load was issued for
    pub chat_id: i64,
    generation: u64,
}

/// State behind the chat list and conversation view.
#[derive(Debug)]
pub struct ChatsScreen {
    session: Session,

    /// Chat list, in server order
    pub chats: Vec<Chat>,
    pub chats_phase: LoadPhase,

    /// Messages of the selected chat, in server order
    pub messages: Vec<Message>,
    pub messages_phase: LoadPhase,

    /// Currently selected chat, local UI state only
    pub selected_chat: Option<i64>,
    /// Message draft text
    pub message_input: String,
    /// Whether a send is in flight
    pub sending: bool,

    /// Channel-creation form
    pub show_channel_form: bool,
    pub channel_draft: ChannelDraft,

    /// Display hook for the last failure; cleared by the next success
    pub ui_error: Option<String>,

    generation: u64,
}

impl ChatsScreen {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            chats: Vec::new(),
            chats_phase: LoadPhase::Idle,
            messages: Vec::new(),
            messages_phase: LoadPhase::Idle,
            selected_chat: None,
            message_input: String::new(),
            sending: false,
            show_channel_form: false,
            channel_draft: ChannelDraft::default(),
            ui_error: None,
            generation: 0,
        }
    }

    /// One-shot load on screen entry. Subsequent activations are no-ops;
    /// use [`refresh_chats`](Self::refresh_chats) to force a reload.
    pub async fn activate(&mut self, api: &MessagingApi) {
        if self.chats_phase == LoadPhase::Idle {
            self.refresh_chats(api).await;
        }
    }

    /// Replace the chat list with the server's. The server owns ordering
    /// and unread counts; the list is mirrored verbatim.
    pub async fn refresh_chats(&mut self, api: &MessagingApi) {
        self.chats_phase = LoadPhase::Loading;
        match api.get_chats(self.session.user_id).await {
            Ok(chats) => {
                self.chats = chats;
                self.chats_phase = LoadPhase::Ready;
                self.ui_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load chats");
                self.chats_phase = LoadPhase::Failed;
                self.ui_error = Some(format!("Failed to load chats: {}", e));
            }
        }
    }

    /// Select a chat. Bumps the load generation so any earlier in-flight
    /// message load becomes stale, and returns the ticket the new load
    /// must carry.
    pub fn select_chat(&mut self, chat_id: i64) -> MessageLoad {
        self.selected_chat = Some(chat_id);
        self.generation += 1;
        self.messages_phase = LoadPhase::Loading;
        MessageLoad {
            chat_id,
            generation: self.generation,
        }
    }

    /// Run the message load for a ticket and apply the outcome.
    pub async fn fetch_messages(&mut self, api: &MessagingApi, load: MessageLoad) {
        let result = api.get_messages(load.chat_id, self.session.user_id).await;
        self.apply_messages(load, result);
    }

    /// Select a chat and load its messages in one step.
    pub async fn open_chat(&mut self, api: &MessagingApi, chat_id: i64) {
        let load = self.select_chat(chat_id);
        self.fetch_messages(api, load).await;
    }

    /// Apply a finished message load. Stale tickets are dropped without
    /// touching state.
    pub fn apply_messages(&mut self, load: MessageLoad, result: Result<Vec<Message>, ApiError>) {
        if load.generation != self.generation {
            tracing::debug!(
                chat_id = load.chat_id,
                "discarding stale message load for superseded selection"
            );
            return;
        }
        match result {
            Ok(messages) => {
                self.messages = messages;
                self.messages_phase = LoadPhase::Ready;
                self.ui_error = None;
            }
            Err(e) => {
                tracing::error!(chat_id = load.chat_id, error = %e, "failed to load messages");
                self.messages_phase = LoadPhase::Failed;
                self.ui_error = Some(format!("Failed to load messages: {}", e));
            }
        }
    }

    /// Send the current draft to the selected chat.
    ///
    /// On confirmation the server's message object is appended, the draft
    /// is cleared, and the chat list is re-fetched. On any failure the
    /// message list and the draft are left untouched.
    pub async fn send_message(&mut self, api: &MessagingApi) {
        let text = self.message_input.trim().to_string();
        let Some(chat_id) = self.selected_chat else {
            return;
        };
        if text.is_empty() {
            return;
        }

        self.sending = true;
        let result = api
            .send_message(chat_id, self.session.user_id, text)
            .await;
        self.sending = false;

        match result {
            Ok(message) => {
                self.messages.push(message);
                self.message_input.clear();
                self.ui_error = None;
                // Server-side ordering and unread counts moved; catch up.
                self.refresh_chats(api).await;
            }
            Err(e) => {
                tracing::error!(chat_id, error = %e, "failed to send message");
                self.ui_error = Some(format!("Failed to send message: {}", e));
            }
        }
    }

    /// Open the channel-creation form with a fresh draft.
    pub fn open_channel_form(&mut self) {
        self.show_channel_form = true;
        self.channel_draft = ChannelDraft::default();
        self.ui_error = None;
    }

    /// Close the channel-creation form, discarding the draft.
    pub fn close_channel_form(&mut self) {
        self.show_channel_form = false;
        self.channel_draft = ChannelDraft::default();
    }

    /// Submit the channel draft. On success the form closes and the chat
    /// list is re-fetched so the new channel appears; on failure the form
    /// stays open with the draft intact.
    pub async fn submit_channel(&mut self, api: &MessagingApi) {
        if !self.channel_draft.is_valid() {
            return;
        }
        let draft = self.channel_draft.clone();
        match api
            .create_channel(
                draft.name,
                draft.description,
                draft.avatar_emoji,
                self.session.user_id,
            )
            .await
        {
            Ok(()) => {
                self.close_channel_form();
                self.refresh_chats(api).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create channel");
                self.ui_error = Some(format!("Failed to create channel: {}", e));
            }
        }
    }

    /// The currently selected chat's list entry, if it is in the list.
    pub fn selected(&self) -> Option<&Chat> {
        self.selected_chat
            .and_then(|id| self.chats.iter().find(|c| c.id == id))
    }
}
