//! WebSocket envelope DTOs.
//!
//! Every frame is a JSON object discriminated by its `type` field. Payloads are
//! loosely typed on the server side, so inbound DTOs default every optional
//! field and accept both string and numeric ids.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Room id as it appears on the wire (string or number)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

/// Message timestamp: epoch milliseconds or an RFC 3339 string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireTimestamp {
    Millis(i64),
    Text(String),
}

/// Participant entry: either a bare name or `{username, mood}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParticipantDto {
    Name(String),
    Detailed {
        username: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mood: Option<String>,
    },
}

/// Chat message payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub username: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<WireTimestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Room payload, used both for list entries and for join snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: WireId,
    pub name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<MessageDto>,
}

/// Envelopes sent by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientEnvelope {
    GetRooms,
    JoinRoom {
        room_id: WireId,
        username: String,
    },
    SendMessage {
        content: String,
        mood: String,
        /// Omitted entirely when no tags are selected
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tags: Option<Vec<String>>,
    },
    UpdateMood {
        room_id: WireId,
        mood: String,
    },
    CreateRoom {
        name: String,
        interests: Vec<String>,
    },
}

/// Envelopes sent by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerEnvelope {
    Rooms {
        #[serde(default)]
        rooms: Vec<RoomDto>,
    },
    Message {
        message: MessageDto,
    },
    RoomJoined {
        room: RoomDto,
    },
    ParticipantsUpdate {
        #[serde(default)]
        participants: Vec<ParticipantDto>,
    },
    MoodUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        username: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mood: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        participants: Option<Vec<ParticipantDto>>,
    },
}

/// `type` values the client understands
const SERVER_ENVELOPE_TYPES: [&str; 5] = [
    "rooms",
    "message",
    "roomJoined",
    "participantsUpdate",
    "moodUpdate",
];

/// Inbound frame decoding errors
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Frame is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Frame has no string 'type' field")]
    MissingType,

    #[error("Malformed '{kind}' envelope: {source}")]
    MalformedPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode an inbound text frame.
///
/// Returns `Ok(None)` for envelopes whose `type` is well-formed but unknown;
/// callers treat those as no-ops.
pub fn decode_server_envelope(text: &str) -> Result<Option<ServerEnvelope>, DecodeError> {
    let value: Value = serde_json::from_str(text).map_err(DecodeError::InvalidJson)?;

    let kind = match value.get("type").and_then(Value::as_str) {
        Some(kind) => kind.to_string(),
        None => return Err(DecodeError::MissingType),
    };

    if !SERVER_ENVELOPE_TYPES.contains(&kind.as_str()) {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|source| DecodeError::MalformedPayload { kind, source })
}

/// Encode an outbound envelope as a text frame.
pub fn encode_client_envelope(envelope: &ClientEnvelope) -> Result<String, serde_json::Error> {
    serde_json::to_string(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_rooms_has_only_type() {
        // テスト項目: getRooms は type フィールドのみを持つ
        // given (前提条件):
        let envelope = ClientEnvelope::GetRooms;

        // when (操作):
        let value = serde_json::to_value(&envelope).unwrap();

        // then (期待する結果):
        assert_eq!(value, json!({"type": "getRooms"}));
    }

    #[test]
    fn test_send_message_omits_tags_when_none() {
        // テスト項目: タグ未選択の sendMessage では tags キー自体が省略される
        // given (前提条件):
        let envelope = ClientEnvelope::SendMessage {
            content: "hi".to_string(),
            mood: "😊".to_string(),
            tags: None,
        };

        // when (操作):
        let value = serde_json::to_value(&envelope).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({"type": "sendMessage", "content": "hi", "mood": "😊"})
        );
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn test_join_room_uses_camel_case_and_keeps_numeric_id() {
        // テスト項目: joinRoom は roomId をキャメルケースで、数値 ID のまま送る
        // given (前提条件):
        let envelope = ClientEnvelope::JoinRoom {
            room_id: WireId::Number(42),
            username: "alice".to_string(),
        };

        // when (操作):
        let value = serde_json::to_value(&envelope).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({"type": "joinRoom", "roomId": 42, "username": "alice"})
        );
    }

    #[test]
    fn test_decode_rooms_with_empty_list() {
        // テスト項目: 空の rooms エンベロープがデコードできる
        // given (前提条件):
        let text = r#"{"type":"rooms","rooms":[]}"#;

        // when (操作):
        let result = decode_server_envelope(text).unwrap();

        // then (期待する結果):
        assert_eq!(result, Some(ServerEnvelope::Rooms { rooms: vec![] }));
    }

    #[test]
    fn test_decode_unknown_type_is_none() {
        // テスト項目: 未知の type は None としてデコードされる
        // given (前提条件):
        let text = r#"{"type":"typing","username":"bob"}"#;

        // when (操作):
        let result = decode_server_envelope(text).unwrap();

        // then (期待する結果):
        assert_eq!(result, None);
    }

    #[test]
    fn test_decode_outbound_type_is_none() {
        // テスト項目: クライアント送信用の type を受信しても無視される
        // given (前提条件):
        let text = r#"{"type":"getRooms"}"#;

        // when (操作):
        let result = decode_server_envelope(text).unwrap();

        // then (期待する結果):
        assert_eq!(result, None);
    }

    #[test]
    fn test_decode_invalid_json() {
        // テスト項目: JSON でないフレームはエラーになる
        // given (前提条件):
        let text = "not json";

        // when (操作):
        let result = decode_server_envelope(text);

        // then (期待する結果):
        assert!(matches!(result, Err(DecodeError::InvalidJson(_))));
    }

    #[test]
    fn test_decode_missing_type() {
        // テスト項目: type フィールドが無いフレームはエラーになる
        // given (前提条件):
        let text = r#"{"rooms":[]}"#;

        // when (操作):
        let result = decode_server_envelope(text);

        // then (期待する結果):
        assert!(matches!(result, Err(DecodeError::MissingType)));
    }

    #[test]
    fn test_decode_malformed_known_type() {
        // テスト項目: 既知の type でもペイロードが不正ならエラーになる
        // given (前提条件):
        let text = r#"{"type":"message"}"#;

        // when (操作):
        let result = decode_server_envelope(text);

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(DecodeError::MalformedPayload { ref kind, .. }) if kind == "message"
        ));
    }

    #[test]
    fn test_decode_room_joined_with_mixed_participants() {
        // テスト項目: 文字列とオブジェクトが混在する参加者リストをデコードできる
        // given (前提条件):
        let text = json!({
            "type": "roomJoined",
            "room": {
                "id": "r1",
                "name": "Makers",
                "interests": ["Design"],
                "participants": ["alice", {"username": "bob", "mood": "😎"}],
                "messages": [
                    {"username": "bob", "content": "hey", "timestamp": "2023-01-01T00:00:00Z"},
                    {"username": "alice", "content": "yo", "timestamp": 1672531200000_i64, "tags": ["Arts"]}
                ]
            }
        })
        .to_string();

        // when (操作):
        let result = decode_server_envelope(&text).unwrap();

        // then (期待する結果):
        let Some(ServerEnvelope::RoomJoined { room }) = result else {
            panic!("expected roomJoined, got {:?}", result);
        };
        assert_eq!(room.id, WireId::Text("r1".to_string()));
        assert_eq!(
            room.participants,
            vec![
                ParticipantDto::Name("alice".to_string()),
                ParticipantDto::Detailed {
                    username: "bob".to_string(),
                    mood: Some("😎".to_string()),
                },
            ]
        );
        assert_eq!(room.messages.len(), 2);
        assert_eq!(
            room.messages[1].timestamp,
            Some(WireTimestamp::Millis(1672531200000))
        );
    }

    #[test]
    fn test_decode_mood_update_without_participants() {
        // テスト項目: participants が無い moodUpdate がデコードできる
        // given (前提条件):
        let text = r#"{"type":"moodUpdate","username":"bob","mood":"🤔"}"#;

        // when (操作):
        let result = decode_server_envelope(text).unwrap();

        // then (期待する結果):
        assert_eq!(
            result,
            Some(ServerEnvelope::MoodUpdate {
                username: Some("bob".to_string()),
                mood: Some("🤔".to_string()),
                participants: None,
            })
        );
    }
}
