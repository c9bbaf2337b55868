//! Terminal UI: command parsing, formatting and prompt handling.

pub mod command;
pub mod formatter;
pub mod prompt;

pub use command::{CommandError, HELP_TEXT, UserCommand, parse_command};
pub use formatter::MessageFormatter;
pub use prompt::{prompt_for, redisplay_prompt};
