//! Screen Controllers
//!
//! The state half of each screen: chat list + conversation, contacts,
//! profile, and the admin dashboard. Controllers own the data their
//! screen displays, are driven by explicit activation calls, and follow
//! one discipline for every backend call: on success the server payload
//! replaces (or appends to) the cache verbatim; on failure the cache is
//! left exactly as it was, the failure is logged, and `ui_error` carries
//! a display hook for the rendering layer.

mod admin;
mod chats;
mod contacts;
mod profile;
mod session;

pub use admin::AdminScreen;
pub use chats::{ChatsScreen, MessageLoad};
pub use contacts::ContactsScreen;
pub use profile::ProfileScreen;
pub use session::Session;

/// Lifecycle of one loadable dataset.
///
/// `Failed` intentionally keeps the previously displayed data; it only
/// differs from `Ready` in that `ui_error` is set on the owning screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The cache mirrors a successful response
    Ready,
    /// The last request failed; the cache shows the previous data
    Failed,
}
