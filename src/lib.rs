//! mgram - Messenger Front-End Core
//!
//! Behavioral core of a secure-messenger front end: typed wire schemas,
//! a single-endpoint JSON API client, and per-screen state controllers.
//! Rendering is out of scope; a UI layer drives the controllers and
//! displays their state.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration, error taxonomy, and the wire records
//!   exchanged verbatim with the backend.
//! - **`client`** - The messaging API client. Every user intent is one
//!   POST with an `action`-tagged JSON body; success is judged by the
//!   presence of the expected key in the response, not by HTTP status.
//! - **`screens`** - State controllers for the chats, contacts, profile,
//!   and admin screens, driven by explicit activation calls.
//!
//! # The backend contract
//!
//! The server owns everything it reports: list ordering, unread counts,
//! rating scores, message IDs, and timestamp formatting. The client
//! mirrors responses verbatim and recomputes none of it. Mutations use
//! reload-on-success (re-fetch the authoritative list) rather than local
//! merges; sends append only the server-confirmed message object.
//!
//! # Example
//!
//! ```rust,no_run
//! use mgram::client::MessagingApi;
//! use mgram::screens::{ChatsScreen, Session};
//! use mgram::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let api = MessagingApi::new(&config)?;
//!
//! let mut chats = ChatsScreen::new(Session::new(1));
//! chats.activate(&api).await;
//! if let Some(first) = chats.chats.first().map(|c| c.id) {
//!     chats.open_chat(&api, first).await;
//! }
//!
//! chats.message_input = "Привет!".to_string();
//! chats.send_message(&api).await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod screens;
pub mod shared;
