//! Console text
//!
//! Every string the shell prints.

pub const MENU: &str = "Меню:\n\
1 - Додати користувача\n\
2 - Видалити користувача\n\
3 - Аутентифікація користувача\n\
4 - Вийти\n";

pub const CHOICE_PROMPT: &str = "Виберіть опцію: ";
pub const USERNAME_PROMPT: &str = "Ім'я: ";
pub const PASSWORD_PROMPT: &str = "Пароль: ";

pub const USER_REGISTERED: &str = "Користувач доданий.";
pub const USER_REMOVED: &str = "Користувач видалений.";
pub const USER_AUTHENTICATED: &str = "Користувача аутентифіковано.";
pub const EXITING: &str = "Вихід...";
pub const UNKNOWN_CHOICE: &str = "Невірний вибір.";

/// Format an error line for the console
pub fn format_error(message: &str) -> String {
    format!("Помилка: {}", message)
}
