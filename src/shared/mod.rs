//! Shared Types
//!
//! Configuration, error taxonomy, and the wire records exchanged with the
//! messaging backend.

pub mod config;
pub mod error;
pub mod messaging;

pub use error::ApiError;
