//! Messaging API Client
//!
//! Request construction (`action`) and the HTTP client (`api`) for the
//! single-endpoint backend protocol.

pub mod action;
pub mod api;

pub use action::Action;
pub use api::MessagingApi;
