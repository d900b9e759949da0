//! Acting-User Session
//!
//! Identifies the authenticated user behind every backend call. Threaded
//! explicitly through the controllers so no screen carries a hardcoded
//! user ID.

/// The authenticated session every controller acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Server-assigned ID of the acting user
    pub user_id: i64,
    /// Whether the acting user holds admin rights
    pub is_admin: bool,
}

impl Session {
    /// Session for a regular user.
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }

    /// Session for an admin user.
    pub fn admin(user_id: i64) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }
}
