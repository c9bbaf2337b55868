//! Prompt utilities for the terminal client.

use std::io::Write;

/// Prompt shown by the line editor
pub fn prompt_for(username: &str) -> String {
    format!("{}> ", username)
}

/// Redisplay the prompt after printing asynchronous output
pub fn redisplay_prompt(username: &str) {
    print!("{}", prompt_for(username));
    std::io::stdout().flush().ok();
}
