//! API Error Types
//!
//! Failure taxonomy for calls against the messaging endpoint:
//!
//! - `Transport` - the request never completed
//! - `Decode` - the body was not the JSON shape we expected
//! - `MissingField` - valid JSON, but the key that signals success is
//!   absent or null ("no data")
//! - `Rejected` - the server answered `success: false`
//!
//! Callers never retry; a failed call leaves state as it was.

use thiserror::Error;

/// Errors produced by the messaging API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or protocol failure; the request did not complete.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be parsed into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response parsed but lacks the field that signals success.
    #[error("response missing expected field '{field}'")]
    MissingField {
        /// The key whose presence marks a successful response
        field: &'static str,
    },

    /// The server reported a logical failure for a mutation.
    #[error("server rejected '{action}' request")]
    Rejected {
        /// The action that was refused
        action: &'static str,
    },
}

impl ApiError {
    /// Create a missing-field error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create a rejection error for the given action.
    pub fn rejected(action: &'static str) -> Self {
        Self::Rejected { action }
    }

    /// Whether the failure is a "no data" response rather than a broken
    /// connection: the server answered, it just did not confirm.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::Rejected { .. })
    }
}
