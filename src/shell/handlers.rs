//! Menu handlers
//!
//! Each handler runs one directory operation and turns the outcome into a
//! `ShellResult` carrying the line to print.

use crate::directory::UserDirectory;
use crate::error::DirectoryError;
use crate::error::handlers::handle_error;
use crate::shell::commands::{ShellResult, ShellStatus};
use crate::shell::responses;

fn success(message: &str) -> ShellResult {
    ShellResult {
        status: ShellStatus::Success,
        message: Some(message.to_string()),
    }
}

fn failure(operation: &str, err: DirectoryError) -> ShellResult {
    handle_error(operation, &err);
    let message = err.to_string();
    ShellResult {
        message: Some(responses::format_error(&message)),
        status: ShellStatus::Failure(message),
    }
}

pub fn handle_register(
    directory: &mut UserDirectory,
    username: &str,
    password: &str,
) -> ShellResult {
    match directory.register(username, password) {
        Ok(()) => success(responses::USER_REGISTERED),
        Err(e) => failure("Register", e),
    }
}

pub fn handle_remove(directory: &mut UserDirectory, username: &str) -> ShellResult {
    match directory.remove(username) {
        Ok(()) => success(responses::USER_REMOVED),
        Err(e) => failure("Remove", e),
    }
}

pub fn handle_authenticate(
    directory: &UserDirectory,
    username: &str,
    password: &str,
) -> ShellResult {
    match directory.authenticate(username, password) {
        Ok(()) => success(responses::USER_AUTHENTICATED),
        Err(e) => failure("Authenticate", e),
    }
}

pub fn handle_exit() -> ShellResult {
    ShellResult {
        status: ShellStatus::Exit,
        message: Some(responses::EXITING.to_string()),
    }
}

pub fn handle_unknown() -> ShellResult {
    ShellResult {
        status: ShellStatus::Failure("Unknown menu choice".into()),
        message: Some(responses::UNKNOWN_CHOICE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_success_message() {
        let mut directory = UserDirectory::new();
        let result = handle_register(&mut directory, "alice1", "Sunshine123!");

        assert_eq!(result.status, ShellStatus::Success);
        assert_eq!(result.message.as_deref(), Some("Користувач доданий."));
    }

    #[test]
    fn test_register_failure_message() {
        let mut directory = UserDirectory::new();
        let result = handle_register(&mut directory, "bob", "Sunshine123!");

        assert_eq!(
            result.status,
            ShellStatus::Failure("Недійсне ім'я користувача.".into())
        );
        assert_eq!(
            result.message.as_deref(),
            Some("Помилка: Недійсне ім'я користувача.")
        );
    }

    #[test]
    fn test_duplicate_reports_existing_user() {
        let mut directory = UserDirectory::new();
        handle_register(&mut directory, "alice1", "Sunshine123!");
        let result = handle_register(&mut directory, "alice1", "Sunshine123!");

        assert_eq!(
            result.message.as_deref(),
            Some("Помилка: Користувач вже існує.")
        );
    }

    #[test]
    fn test_remove_and_authenticate_messages() {
        let mut directory = UserDirectory::new();
        handle_register(&mut directory, "alice1", "Sunshine123!");

        let result = handle_authenticate(&directory, "alice1", "nope");
        assert_eq!(result.message.as_deref(), Some("Помилка: Неправильний пароль."));

        let result = handle_authenticate(&directory, "alice1", "Sunshine123!");
        assert_eq!(result.message.as_deref(), Some("Користувача аутентифіковано."));

        let result = handle_remove(&mut directory, "alice1");
        assert_eq!(result.message.as_deref(), Some("Користувач видалений."));

        let result = handle_remove(&mut directory, "alice1");
        assert_eq!(
            result.message.as_deref(),
            Some("Помилка: Користувача не знайдено.")
        );
    }

    #[test]
    fn test_exit_and_unknown() {
        assert_eq!(handle_exit().status, ShellStatus::Exit);
        assert!(matches!(handle_unknown().status, ShellStatus::Failure(_)));
        assert_eq!(handle_unknown().message.as_deref(), Some("Невірний вибір."));
    }
}
