//! Domain entities: rooms, messages, participants.

use super::{
    error::RoomDraftError,
    value_object::{Interest, Mood, RoomId, Tag, Timestamp},
};

/// Maximum number of interests a new room may carry.
pub const MAX_ROOM_INTERESTS: usize = 5;

/// A room participant as last reported by the server.
///
/// `mood` is `None` when the server sent only a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub mood: Option<Mood>,
}

impl Participant {
    pub fn new(name: impl Into<String>, mood: Option<Mood>) -> Self {
        Self {
            name: name.into(),
            mood,
        }
    }
}

/// A chat message. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub username: String,
    pub content: String,
    pub timestamp: Option<Timestamp>,
    pub mood: Option<Mood>,
    pub tags: Vec<Tag>,
}

/// Room list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub id: RoomId,
    pub name: String,
    pub interests: Vec<Tag>,
    pub participants: Vec<Participant>,
}

/// The room the client has joined, including its transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub interests: Vec<Tag>,
    pub participants: Vec<Participant>,
    pub messages: Vec<ChatMessage>,
}

impl Room {
    /// Append a message to the transcript.
    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Replace the roster wholesale.
    pub fn replace_participants(&mut self, participants: Vec<Participant>) {
        self.participants = participants;
    }

    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name == name)
    }
}

/// A validated request to create a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    name: String,
    interests: Vec<Interest>,
}

impl RoomDraft {
    /// Validate a room name and interest selection.
    ///
    /// The name is trimmed and must be non-empty; between 1 and
    /// [`MAX_ROOM_INTERESTS`] interests are required. Duplicate interests are
    /// collapsed before counting.
    pub fn new(name: &str, interests: Vec<Interest>) -> Result<Self, RoomDraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RoomDraftError::MissingName);
        }

        let mut unique: Vec<Interest> = Vec::with_capacity(interests.len());
        for interest in interests {
            if !unique.contains(&interest) {
                unique.push(interest);
            }
        }

        if unique.is_empty() {
            return Err(RoomDraftError::NoInterests);
        }
        if unique.len() > MAX_ROOM_INTERESTS {
            return Err(RoomDraftError::TooManyInterests {
                max: MAX_ROOM_INTERESTS,
            });
        }

        Ok(Self {
            name: name.to_string(),
            interests: unique,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }
}
