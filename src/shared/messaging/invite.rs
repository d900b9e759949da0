//! Friend Invite
//!
//! Invite codes are generated server-side; the client only reveals the
//! returned code.

use serde::Deserialize;

/// Response envelope for `create_invite`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteResponse {
    pub invite_code: Option<String>,
    /// Server-side row ID of the invite; informational only
    pub id: Option<i64>,
}
