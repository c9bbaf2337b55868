//! Client-side view of the chat: room list, current room, moods, selections.
//!
//! `current_room` is the only roster the client keeps, and `participant_moods`
//! the only mood store. Every rendered participant list is resolved against
//! both, so there is no second, possibly stale, copy to fall back on.

use std::collections::HashMap;

use crate::domain::{ChatMessage, Interest, Mood, Participant, Room, RoomSummary, Username};

/// Something the UI should render after an inbound envelope was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// The room list was replaced (possibly with an empty list)
    RoomsListed(Vec<RoomSummary>),
    /// A message was appended to the current room
    MessageReceived(ChatMessage),
    /// A room snapshot became the current room; participants carry resolved moods
    RoomJoined(Room),
    /// The current room's roster changed; participants carry resolved moods
    ParticipantsUpdated(Vec<Participant>),
}

/// Local chat state shared by the inbound dispatcher and the input loop.
#[derive(Debug, Clone)]
pub struct ChatState {
    pub(super) username: Username,
    pub(super) rooms: Vec<RoomSummary>,
    pub(super) current_room: Option<Room>,
    pub(super) participant_moods: HashMap<String, Mood>,
    pub(super) current_mood: Mood,
    pub(super) selected_tags: Vec<Interest>,
}

impl ChatState {
    pub fn new(username: Username) -> Self {
        Self {
            username,
            rooms: Vec::new(),
            current_room: None,
            participant_moods: HashMap::new(),
            current_mood: Mood::default(),
            selected_tags: Vec::new(),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn rooms(&self) -> &[RoomSummary] {
        &self.rooms
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.current_room.as_ref()
    }

    pub fn current_mood(&self) -> &Mood {
        &self.current_mood
    }

    pub fn selected_tags(&self) -> &[Interest] {
        &self.selected_tags
    }

    /// Cached mood for a participant, if any was ever reported
    pub fn mood_of(&self, name: &str) -> Option<&Mood> {
        self.participant_moods.get(name)
    }

    /// Forget the joined room. Called when a connection is lost: a new
    /// connection has not joined anything yet.
    pub fn reset_connection(&mut self) {
        if let Some(room) = self.current_room.take() {
            tracing::debug!("Leaving room '{}' after disconnect", room.name);
        }
    }

    /// Record moods carried by roster entries.
    pub(super) fn cache_moods(&mut self, participants: &[Participant]) {
        for participant in participants {
            if let Some(mood) = &participant.mood {
                self.participant_moods
                    .insert(participant.name.clone(), mood.clone());
            }
        }
    }

    /// Fill in each participant's mood: cached mood first, then the entry's
    /// own mood, then the default.
    pub fn resolve_participants(&self, participants: &[Participant]) -> Vec<Participant> {
        participants
            .iter()
            .map(|participant| {
                let mood = self
                    .participant_moods
                    .get(&participant.name)
                    .cloned()
                    .or_else(|| participant.mood.clone())
                    .unwrap_or_default();
                Participant::new(participant.name.clone(), Some(mood))
            })
            .collect()
    }
}
