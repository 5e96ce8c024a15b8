//! Error types
//!
//! `DirectoryError` is what every directory operation returns on failure.
//! Its `Display` text is the message shown to the person at the console.
//! `AppError` is the binary's top-level error.

use std::fmt;
use std::io;

/// Why a username was refused at registration.
///
/// Both cases surface as `DirectoryError::InvalidUsername`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameRejection {
    /// Too short, or contains a space
    Malformed,
    /// A live record already has this username
    AlreadyExists,
}

/// Fieldless view of a `DirectoryError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUsername,
    InvalidPassword,
    UserNotFound,
    WrongPassword,
    CapacityExceeded,
}

/// Directory module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    InvalidUsername(UsernameRejection),
    InvalidPassword,
    UserNotFound(String),
    WrongPassword(String),
    CapacityExceeded(usize),
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::InvalidUsername(_) => ErrorKind::InvalidUsername,
            DirectoryError::InvalidPassword => ErrorKind::InvalidPassword,
            DirectoryError::UserNotFound(_) => ErrorKind::UserNotFound,
            DirectoryError::WrongPassword(_) => ErrorKind::WrongPassword,
            DirectoryError::CapacityExceeded(_) => ErrorKind::CapacityExceeded,
        }
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::InvalidUsername(UsernameRejection::Malformed) => {
                write!(f, "Недійсне ім'я користувача.")
            }
            DirectoryError::InvalidUsername(UsernameRejection::AlreadyExists) => {
                write!(f, "Користувач вже існує.")
            }
            DirectoryError::InvalidPassword => write!(f, "Недійсний пароль."),
            DirectoryError::UserNotFound(_) => write!(f, "Користувача не знайдено."),
            DirectoryError::WrongPassword(_) => write!(f, "Неправильний пароль."),
            DirectoryError::CapacityExceeded(_) => {
                write!(f, "Досягнуто максимальну кількість користувачів.")
            }
        }
    }
}

impl std::error::Error for DirectoryError {}

/// General application error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Directory(DirectoryError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Directory(e) => write!(f, "Directory error: {}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Directory(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::IoError(e) => Some(e),
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(error: DirectoryError) -> Self {
        AppError::Directory(error)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
