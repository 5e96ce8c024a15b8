//! Module `commands`
//!
//! Menu choices read from the console and the result of acting on one.

/// A numbered menu entry typed at the option prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,     // 1
    Remove,       // 2
    Authenticate, // 3
    Exit,         // 4
    Unknown,      // Anything else
}

/// Outcome status of a handled menu choice.
#[derive(Debug, PartialEq)]
pub enum ShellStatus {
    Success,
    Failure(String),
    Exit,
}

/// Status plus the line to print back to the console.
#[derive(Debug)]
pub struct ShellResult {
    pub status: ShellStatus,
    pub message: Option<String>,
}

/// Parses the option line. Surrounding whitespace is ignored.
pub fn parse_choice(raw: &str) -> MenuChoice {
    match raw.trim() {
        "1" => MenuChoice::Register,
        "2" => MenuChoice::Remove,
        "3" => MenuChoice::Authenticate,
        "4" => MenuChoice::Exit,
        _ => MenuChoice::Unknown,
    }
}
