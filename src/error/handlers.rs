//! Error handlers
//!
//! Logging for errors that are reported to the console and then recovered from.

use crate::error::types::{DirectoryError, ErrorKind};
use log::{info, warn};

/// Log a rejected directory operation.
///
/// Policy rejections are routine input mistakes and log at info; the rest warn.
pub fn handle_error(operation: &str, err: &DirectoryError) {
    if is_policy_error(err) {
        info!("{} rejected: {:?}", operation, err);
        return;
    }

    match err {
        DirectoryError::UserNotFound(username) | DirectoryError::WrongPassword(username) => {
            warn!("{} failed for '{}': {:?}", operation, username, err.kind());
        }
        DirectoryError::CapacityExceeded(capacity) => {
            warn!("{} failed: all {} slots are occupied", operation, capacity);
        }
        _ => warn!("{} failed: {:?}", operation, err),
    }
}

/// Whether the error came from input-policy checks rather than directory state
pub fn is_policy_error(err: &DirectoryError) -> bool {
    matches!(err.kind(), ErrorKind::InvalidUsername | ErrorKind::InvalidPassword)
}
