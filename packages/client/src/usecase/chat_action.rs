//! Outbound chat actions.
//!
//! Each action returns the envelope to send. Nothing waits for a reply:
//! completion is only visible through later inbound envelopes (`roomJoined`,
//! a `message` echo, a fresh `rooms` list).

use crate::{
    domain::{Interest, Mood, RoomDraft, RoomId},
    infrastructure::dto::websocket::{ClientEnvelope, WireId},
};

use super::{chat_state::ChatState, error::ChatActionError};

impl ChatState {
    /// `getRooms`
    pub fn request_rooms(&self) -> ClientEnvelope {
        ClientEnvelope::GetRooms
    }

    /// `joinRoom {roomId, username}`
    ///
    /// The id is sent exactly as the room list carried it; `room_id` is only
    /// used as-is when no listed room matches.
    pub fn join_room(&self, room_id: &RoomId) -> ClientEnvelope {
        ClientEnvelope::JoinRoom {
            room_id: WireId::from(self.listed_room_id(room_id)),
            username: self.username.as_str().to_string(),
        }
    }

    /// The listed id whose text matches `typed`, or `typed` itself
    fn listed_room_id<'a>(&'a self, typed: &'a RoomId) -> &'a RoomId {
        let text = typed.to_string();
        self.rooms
            .iter()
            .map(|room| &room.id)
            .find(|id| id.to_string() == text)
            .unwrap_or(typed)
    }

    /// `sendMessage {content, mood, tags?}`
    ///
    /// `tags` is omitted when nothing is selected. The selection is cleared
    /// once the envelope is built.
    pub fn send_message(&mut self, text: &str) -> Result<ClientEnvelope, ChatActionError> {
        let content = text.trim();
        if content.is_empty() {
            return Err(ChatActionError::EmptyMessage);
        }
        if self.current_room.is_none() {
            return Err(ChatActionError::NotInRoom);
        }

        let tags: Option<Vec<String>> = (!self.selected_tags.is_empty()).then(|| {
            self.selected_tags
                .iter()
                .map(|tag| tag.as_str().to_string())
                .collect()
        });
        self.selected_tags.clear();

        Ok(ClientEnvelope::SendMessage {
            content: content.to_string(),
            mood: self.current_mood.as_str().to_string(),
            tags,
        })
    }

    /// `createRoom {name, interests}` after client-side validation
    pub fn create_room(
        &self,
        name: &str,
        interests: Vec<Interest>,
    ) -> Result<ClientEnvelope, ChatActionError> {
        let draft = RoomDraft::new(name, interests)?;
        Ok(ClientEnvelope::CreateRoom {
            name: draft.name().to_string(),
            interests: draft
                .interests()
                .iter()
                .map(|interest| interest.as_str().to_string())
                .collect(),
        })
    }

    /// Change the local mood; returns `updateMood {roomId, mood}` when in a room.
    pub fn change_mood(&mut self, mood: Mood) -> Option<ClientEnvelope> {
        self.current_mood = mood;
        self.current_room
            .as_ref()
            .map(|room| ClientEnvelope::UpdateMood {
                room_id: WireId::from(&room.id),
                mood: self.current_mood.as_str().to_string(),
            })
    }

    /// Select tags for the next message. An empty list clears the selection.
    pub fn select_tags(&mut self, tags: Vec<Interest>) {
        self.selected_tags.clear();
        for tag in tags {
            if !self.selected_tags.contains(&tag) {
                self.selected_tags.push(tag);
            }
        }
    }
}
