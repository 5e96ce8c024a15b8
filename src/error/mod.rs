//! Error handling
//!
//! Defines error types and handling for the user directory.

pub mod handlers;
pub mod types;

pub use types::*;
