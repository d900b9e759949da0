//! Contact Data Structure
//!
//! Represents another user in the contact list. Read-only from the
//! client's side; the `status` line ("В сети", "Был 5 мин назад") is
//! rendered by the server.

use serde::{Deserialize, Serialize};

/// A contact in the contact list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Server-assigned user ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Server-formatted presence line
    pub status: String,
    /// Avatar emoji
    pub avatar: String,
    /// Whether the contact is currently online
    pub online: bool,
}

impl Contact {
    /// Get avatar initial (first letter of the name), for avatar fallbacks.
    pub fn avatar_initial(&self) -> char {
        self.name.chars().next().unwrap_or('?').to_uppercase().next().unwrap_or('?')
    }
}

/// Response envelope for `get_contacts`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactsResponse {
    pub contacts: Option<Vec<Contact>>,
}
