//! Domain layer errors.

use thiserror::Error;

/// Value object construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("Unknown interest '{0}'")]
    UnknownInterest(String),

    #[error("Mood cannot be empty")]
    EmptyMood,

    #[error("Mood must be a single emoji, got '{0}'")]
    NotSingleEmoji(String),

    #[error("Room ID cannot be empty")]
    EmptyRoomId,

    #[error("Username cannot be empty")]
    EmptyUsername,
}

/// Room creation validation errors
///
/// The messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomDraftError {
    #[error("Please enter a room name")]
    MissingName,

    #[error("Please select at least one interest")]
    NoInterests,

    #[error("Please select no more than {max} interests")]
    TooManyInterests { max: usize },
}

/// Username storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read username from '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write username to '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Waitlist gateway errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The server answered with a non-success status
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a usable response
    #[error("Waitlist request failed: {0}")]
    Transport(String),
}
