//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{FieldErrors, GatewayError, RoomDraftError};

/// Outbound chat action errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatActionError {
    /// The action needs a current room
    #[error("Join a room first")]
    NotInRoom,

    /// Blank message text
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// Room creation failed client-side validation
    #[error(transparent)]
    InvalidRoom(#[from] RoomDraftError),
}

/// Waitlist submission errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitWaitlistError {
    /// Client-side validation failed; nothing was sent
    #[error("Waitlist form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    /// The server rejected the submission
    #[error("{0}")]
    Rejected(String),

    /// The request could not be completed
    #[error("{0}")]
    Transport(String),
}

impl From<GatewayError> for SubmitWaitlistError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Rejected(message) => SubmitWaitlistError::Rejected(message),
            GatewayError::Transport(message) => {
                SubmitWaitlistError::Transport(format!("Waitlist request failed: {}", message))
            }
        }
    }
}
