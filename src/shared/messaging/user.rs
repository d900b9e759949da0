//! Admin User Record
//!
//! Full user record as shown in the admin dashboard. Only the block state
//! is mutable, and only through the `block_user`/`unblock_user` actions.

use serde::{Deserialize, Serialize};

/// A user as reported by `get_all_users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned user ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Unique handle
    pub username: String,
    /// Avatar emoji
    pub avatar: String,
    /// Whether the user is currently online
    pub online: bool,
    /// Admin flag; admins cannot be blocked from the client
    pub is_admin: bool,
    /// Whether an active block exists for this user
    pub is_blocked: bool,
    /// Server-formatted registration date ("2024-03-12")
    pub created_at: String,
}

/// Response envelope for `get_all_users`.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Option<Vec<User>>,
}

/// Generic acknowledgment envelope for mutations (`create_channel`,
/// `block_user`, `unblock_user`).
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    pub success: Option<bool>,
}
