//! Console shell
//!
//! Menu parsing, prompts, and the interactive loop that drives a
//! `UserDirectory` from line-based input.

pub mod commands;
pub mod handlers;
pub mod responses;
pub mod session;

pub use commands::{MenuChoice, ShellResult, ShellStatus, parse_choice};
pub use session::Session;
