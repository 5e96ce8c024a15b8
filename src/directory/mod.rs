//! User directory
//!
//! Fixed-capacity in-memory store of user records with registration,
//! removal, and credential checks.

pub mod core;
pub mod record;
pub mod validator;

pub use core::UserDirectory;
pub use record::UserRecord;
pub use validator::{is_valid_password, is_valid_username};
