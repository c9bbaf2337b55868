//! Inbound envelope dispatcher.
//!
//! | type                 | effect                                              |
//! |----------------------|-----------------------------------------------------|
//! | `rooms`              | replace the room list                               |
//! | `message`            | append to the current room's transcript             |
//! | `roomJoined`         | replace the current room with the server snapshot   |
//! | `participantsUpdate` | replace the current roster, cache reported moods    |
//! | `moodUpdate`         | cache one mood, re-render the current roster        |
//!
//! Envelopes that cannot take effect (no current room, missing fields) are
//! dropped without an error.

use crate::{
    domain::{ChatMessage, Mood, Participant, Room, RoomSummary},
    infrastructure::dto::websocket::{DecodeError, ServerEnvelope, decode_server_envelope},
};

use super::chat_state::{ChatEvent, ChatState};

impl ChatState {
    /// Decode a text frame and apply it.
    ///
    /// Frames that are not valid envelopes, or whose `type` is unknown, are
    /// no-ops.
    pub fn apply_frame(&mut self, text: &str) -> Vec<ChatEvent> {
        match decode_server_envelope(text) {
            Ok(Some(envelope)) => self.apply(envelope),
            Ok(None) => {
                tracing::debug!("Ignoring envelope with unknown type: {}", text);
                Vec::new()
            }
            Err(DecodeError::InvalidJson(e)) => {
                tracing::debug!("Ignoring non-JSON frame: {}", e);
                Vec::new()
            }
            Err(e) => {
                tracing::debug!("Ignoring frame: {}", e);
                Vec::new()
            }
        }
    }

    /// Apply a decoded envelope and report what changed.
    pub fn apply(&mut self, envelope: ServerEnvelope) -> Vec<ChatEvent> {
        match envelope {
            ServerEnvelope::Rooms { rooms } => {
                self.rooms = rooms.into_iter().map(RoomSummary::from).collect();
                tracing::debug!("Room list replaced ({} rooms)", self.rooms.len());
                vec![ChatEvent::RoomsListed(self.rooms.clone())]
            }
            ServerEnvelope::Message { message } => {
                let message = ChatMessage::from(message);
                match self.current_room.as_mut() {
                    Some(room) => {
                        room.push_message(message.clone());
                        vec![ChatEvent::MessageReceived(message)]
                    }
                    None => {
                        tracing::debug!("Dropping message from '{}': not in a room", message.username);
                        Vec::new()
                    }
                }
            }
            ServerEnvelope::RoomJoined { room } => {
                let room = Room::from(room);
                self.cache_moods(&room.participants);
                tracing::info!("Joined room '{}' ({})", room.name, room.id);

                let resolved = Room {
                    participants: self.resolve_participants(&room.participants),
                    ..room.clone()
                };
                self.current_room = Some(room);
                vec![ChatEvent::RoomJoined(resolved)]
            }
            ServerEnvelope::ParticipantsUpdate { participants } => {
                let participants: Vec<Participant> =
                    participants.into_iter().map(Participant::from).collect();
                self.replace_roster(participants)
                    .map(|resolved| vec![ChatEvent::ParticipantsUpdated(resolved)])
                    .unwrap_or_default()
            }
            ServerEnvelope::MoodUpdate {
                username,
                mood,
                participants,
            } => {
                let (Some(username), Some(mood)) = (username, mood.and_then(|m| Mood::new(m).ok()))
                else {
                    tracing::debug!("Ignoring moodUpdate without username or mood");
                    return Vec::new();
                };

                if let Some(participants) = participants {
                    let participants: Vec<Participant> =
                        participants.into_iter().map(Participant::from).collect();
                    self.replace_roster(participants);
                }
                // The explicit update wins over whatever the roster carried
                self.participant_moods.insert(username, mood);

                match &self.current_room {
                    Some(room) => vec![ChatEvent::ParticipantsUpdated(
                        self.resolve_participants(&room.participants),
                    )],
                    None => Vec::new(),
                }
            }
        }
    }

    /// Replace the current roster; `None` when no room is current.
    fn replace_roster(&mut self, participants: Vec<Participant>) -> Option<Vec<Participant>> {
        if self.current_room.is_none() {
            tracing::debug!("Ignoring roster update: not in a room");
            return None;
        }

        self.cache_moods(&participants);
        let resolved = self.resolve_participants(&participants);
        if let Some(room) = self.current_room.as_mut() {
            room.replace_participants(participants);
        }
        Some(resolved)
    }
}
