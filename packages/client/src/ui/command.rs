//! Parsing of prompt input into user commands.

use thiserror::Error;

use crate::domain::{Interest, Mood, RoomId, ValueObjectError};

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// `/rooms`
    ListRooms,
    /// `/join <room-id>`
    Join(RoomId),
    /// `/create <name> | <Interest>, ...`
    Create {
        name: String,
        interests: Vec<Interest>,
    },
    /// `/mood <emoji>`
    ChangeMood(Mood),
    /// `/tags [<Interest>, ...]`
    SelectTags(Vec<Interest>),
    /// `/interests`
    ShowInterests,
    /// `/help`
    Help,
    /// `/quit`
    Quit,
    /// Plain text
    Say(String),
}

impl UserCommand {
    /// Commands answered locally without touching the connection
    pub fn is_local(&self) -> bool {
        matches!(self, UserCommand::ShowInterests | UserCommand::Help)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '/{0}'. Type /help for a list of commands")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    InvalidArgument(#[from] ValueObjectError),
}

const JOIN_USAGE: &str = "/join <room-id>";
const CREATE_USAGE: &str = "/create <name> | <Interest>, <Interest>...";
const MOOD_USAGE: &str = "/mood <emoji>";

/// Help text listing every command
pub const HELP_TEXT: &str = "\
Commands:
  /rooms                                   refresh the room list
  /join <room-id>                          join a room
  /create <name> | <Interest>, ...         create a room (1 to 5 interests)
  /mood <emoji>                            change your mood
  /tags <Interest>, ...                    tag your next message (/tags alone clears)
  /interests                               list available interests
  /quit                                    leave the chat
Anything else is sent as a message to the current room.";

fn parse_interests(list: &str) -> Result<Vec<Interest>, CommandError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<Interest>().map_err(CommandError::from))
        .collect()
}

/// Parse one prompt line.
///
/// Returns `Ok(None)` for blank input.
pub fn parse_command(line: &str) -> Result<Option<UserCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Some(UserCommand::Say(line.to_string())));
    };

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };

    let command = match name {
        "rooms" => UserCommand::ListRooms,
        "join" => {
            if argument.is_empty() {
                return Err(CommandError::MissingArgument(JOIN_USAGE));
            }
            UserCommand::Join(RoomId::parse(argument)?)
        }
        "create" => {
            let (room_name, interests) = match argument.split_once('|') {
                Some((room_name, interests)) => (room_name.trim(), parse_interests(interests)?),
                None => (argument, Vec::new()),
            };
            if room_name.is_empty() && interests.is_empty() {
                return Err(CommandError::MissingArgument(CREATE_USAGE));
            }
            UserCommand::Create {
                name: room_name.to_string(),
                interests,
            }
        }
        "mood" => {
            if argument.is_empty() {
                return Err(CommandError::MissingArgument(MOOD_USAGE));
            }
            UserCommand::ChangeMood(Mood::from_input(argument)?)
        }
        "tags" => UserCommand::SelectTags(parse_interests(argument)?),
        "interests" => UserCommand::ShowInterests,
        "help" => UserCommand::Help,
        "quit" | "exit" => UserCommand::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}
