//! Messaging Wire Types
//!
//! Plain records exchanged verbatim with the backend. Entity fields use
//! camelCase on the wire; response envelopes keep their payload key
//! optional because success is judged by key presence, not HTTP status.

mod chat;
mod contact;
mod invite;
mod message;
mod rating;
mod stats;
mod user;

pub use chat::{ChannelDraft, Chat, ChatsResponse};
pub use contact::{Contact, ContactsResponse};
pub use invite::InviteResponse;
pub use message::{Message, MessagesResponse, Sender};
pub use rating::UserRating;
pub use stats::AdminStat;
pub use user::{AckResponse, User, UsersResponse};
