pub mod config;
pub mod directory;
pub mod error;
pub mod shell;
pub mod utils;

pub use config::DirectoryConfig;
pub use directory::{UserDirectory, UserRecord};
pub use error::{AppError, DirectoryError, ErrorKind, UsernameRejection};
pub use shell::Session;
