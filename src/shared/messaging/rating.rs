//! User Activity Rating
//!
//! Server-side aggregate of a user's activity. Unlike the list endpoints,
//! `get_user_rating` returns this object directly, without an envelope.
//! The client displays every field as-is; `rating_score` in particular is
//! never recomputed locally.

use serde::{Deserialize, Serialize};

/// Activity aggregate for the profile screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRating {
    pub messages_sent: u64,
    pub messages_received: u64,
    pub calls_made: u64,
    pub files_shared: u64,
    /// Server-computed score; displayed verbatim
    pub rating_score: i64,
    /// Server-formatted timestamp of the last activity, possibly empty
    pub last_activity: String,
}
