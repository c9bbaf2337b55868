//! Conversion logic between DTOs and domain entities.
//!
//! Inbound conversions are lenient: a mood that is blank is dropped, an
//! unparsable timestamp becomes `None`, and unknown tags are kept verbatim.

use netmingle_shared::time::rfc3339_to_millis;

use crate::domain::{ChatMessage, Mood, Participant, Room, RoomId, RoomSummary, Tag, Timestamp};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl From<dto::WireId> for RoomId {
    fn from(id: dto::WireId) -> Self {
        match id {
            dto::WireId::Number(number) => RoomId::Number(number),
            dto::WireId::Text(text) => RoomId::Text(text),
        }
    }
}

fn timestamp_from_wire(timestamp: dto::WireTimestamp) -> Option<Timestamp> {
    match timestamp {
        dto::WireTimestamp::Millis(millis) => Some(Timestamp::new(millis)),
        dto::WireTimestamp::Text(text) => rfc3339_to_millis(&text).map(Timestamp::new),
    }
}

impl From<dto::ParticipantDto> for Participant {
    fn from(dto: dto::ParticipantDto) -> Self {
        match dto {
            dto::ParticipantDto::Name(name) => Participant::new(name, None),
            dto::ParticipantDto::Detailed { username, mood } => {
                Participant::new(username, mood.and_then(|m| Mood::new(m).ok()))
            }
        }
    }
}

impl From<dto::MessageDto> for ChatMessage {
    fn from(dto: dto::MessageDto) -> Self {
        Self {
            username: dto.username,
            content: dto.content,
            timestamp: dto.timestamp.and_then(timestamp_from_wire),
            mood: dto.mood.and_then(|m| Mood::new(m).ok()),
            tags: dto
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(Tag::from)
                .collect(),
        }
    }
}

impl From<dto::RoomDto> for RoomSummary {
    fn from(dto: dto::RoomDto) -> Self {
        Self {
            id: dto.id.into(),
            name: dto.name,
            interests: dto.interests.into_iter().map(Tag::from).collect(),
            participants: dto.participants.into_iter().map(Participant::from).collect(),
        }
    }
}

impl From<dto::RoomDto> for Room {
    fn from(dto: dto::RoomDto) -> Self {
        Self {
            id: dto.id.into(),
            name: dto.name,
            interests: dto.interests.into_iter().map(Tag::from).collect(),
            participants: dto.participants.into_iter().map(Participant::from).collect(),
            messages: dto.messages.into_iter().map(ChatMessage::from).collect(),
        }
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&RoomId> for dto::WireId {
    fn from(id: &RoomId) -> Self {
        match id {
            RoomId::Number(number) => dto::WireId::Number(*number),
            RoomId::Text(text) => dto::WireId::Text(text.clone()),
        }
    }
}
