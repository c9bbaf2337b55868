//! Message formatting utilities for terminal display.

use netmingle_shared::time::millis_to_local_time_of_day;

use crate::{
    connection::ConnectionState,
    domain::{ChatMessage, FieldErrors, Interest, Participant, Room, RoomSummary, Tag},
};

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

/// Interest emojis shown per room in the list before collapsing into `+N`
const LISTED_INTEREST_EMOJIS: usize = 3;

/// Message formatter for terminal display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the room list, or the empty state when there are no rooms
    pub fn format_rooms(rooms: &[RoomSummary]) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n\n{}\nRooms:\n", RULE));

        if rooms.is_empty() {
            output.push_str("No rooms available. Create one to start networking!\n");
        } else {
            for room in rooms {
                output.push_str(&format!(
                    "[{}] {}  {}  ({} participants)\n",
                    room.id,
                    room.name,
                    Self::format_interest_emojis(&room.interests),
                    room.participants.len()
                ));
            }
            output.push_str("Type /join <room-id> to enter a room.\n");
        }

        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// First three interest emojis, then `+N` for the remainder
    fn format_interest_emojis(interests: &[Tag]) -> String {
        let mut parts: Vec<String> = interests
            .iter()
            .take(LISTED_INTEREST_EMOJIS)
            .map(|tag| tag.emoji().to_string())
            .collect();
        if interests.len() > LISTED_INTEREST_EMOJIS {
            parts.push(format!("+{}", interests.len() - LISTED_INTEREST_EMOJIS));
        }
        parts.join(" ")
    }

    /// Format the joined-room header followed by its history
    ///
    /// `room.participants` is expected to carry resolved moods.
    pub fn format_room_joined(room: &Room, current_username: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n\n{}\n# {}\n", RULE, room.name));

        if !room.interests.is_empty() {
            let interests: Vec<&str> = room.interests.iter().map(Tag::as_str).collect();
            output.push_str(&format!("Interests: {}\n", interests.join(", ")));
        }

        output.push_str(&Self::format_participants(&room.participants, current_username));
        output.push_str(RULE);
        output.push('\n');

        if room.messages.is_empty() {
            output.push_str("No messages yet. Be the first to start the conversation!\n");
        } else {
            for message in &room.messages {
                output.push_str(&Self::format_chat_message(message, current_username));
            }
        }

        output
    }

    /// Format the participant count and list, marking the current user
    pub fn format_participants(participants: &[Participant], current_username: &str) -> String {
        let mut output = format!("{} participants\n", participants.len());

        for participant in participants {
            let mood = participant
                .mood
                .as_ref()
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let me_suffix = if participant.name == current_username {
                " (me)"
            } else {
                ""
            };
            output.push_str(&format!("  {} {}{}\n", mood, participant.name, me_suffix));
        }

        output
    }

    /// Format a chat message
    ///
    /// Layout: optional mood, `@username`, local time of day, content, tags.
    pub fn format_chat_message(message: &ChatMessage, current_username: &str) -> String {
        let mut header = String::new();
        if let Some(mood) = &message.mood {
            header.push_str(mood.as_str());
            header.push(' ');
        }
        header.push('@');
        header.push_str(&message.username);
        if message.username == current_username {
            header.push_str(" (me)");
        }
        if let Some(timestamp) = message.timestamp {
            header.push_str(&format!("  {}", millis_to_local_time_of_day(timestamp.value())));
        }

        let mut output = format!("\n{}\n{}\n{}\n", THIN_RULE, header, message.content);
        if !message.tags.is_empty() {
            let tags: Vec<String> = message
                .tags
                .iter()
                .map(|tag| format!("{} {}", tag.emoji(), tag.as_str()))
                .collect();
            output.push_str(&format!("[{}]\n", tags.join("] [")));
        }
        output.push_str(THIN_RULE);
        output.push('\n');
        output
    }

    /// Format the interest vocabulary with emojis
    pub fn format_interests() -> String {
        let mut output = String::from("Interests:\n");
        for interest in Interest::ALL {
            output.push_str(&format!("  {} {}\n", interest.emoji(), interest.as_str()));
        }
        output
    }

    /// Format form validation errors, one `field: message` per line
    pub fn format_field_errors(errors: &FieldErrors) -> String {
        errors
            .iter()
            .map(|(field, message)| format!("{}: {}\n", field, message))
            .collect()
    }

    /// Format a connection state change
    pub fn format_connection_state(state: ConnectionState) -> String {
        match state {
            ConnectionState::Connecting => "\n… Connecting to chat\n".to_string(),
            ConnectionState::Connected => "\n✓ Connected! Fetching available rooms...\n".to_string(),
            ConnectionState::Disconnected => {
                "\n✗ Connection lost. Attempting to reconnect...\n".to_string()
            }
        }
    }

    /// Format a one-line notice (validation errors, hints)
    pub fn format_notice(text: &str) -> String {
        format!("\n! {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mood, RoomId, Timestamp, WaitlistForm};

    fn summary(interests: Vec<Tag>, participants: usize) -> RoomSummary {
        RoomSummary {
            id: RoomId::Number(7),
            name: "Makers".to_string(),
            interests,
            participants: (0..participants)
                .map(|i| Participant::new(format!("p{}", i), None))
                .collect(),
        }
    }

    #[test]
    fn test_format_rooms_empty_state() {
        // テスト項目: ルームが無い場合は空状態のメッセージが表示される
        // given (前提条件):
        let rooms = vec![];

        // when (操作):
        let result = MessageFormatter::format_rooms(&rooms);

        // then (期待する結果):
        assert!(result.contains("No rooms available. Create one to start networking!"));
        assert!(!result.contains("/join"));
    }

    #[test]
    fn test_format_rooms_collapses_extra_interests() {
        // テスト項目: 4 つ目以降の興味タグは +N にまとめられる
        // given (前提条件):
        let interests = vec![
            Tag::Known(Interest::Technology),
            Tag::Known(Interest::Business),
            Tag::Other("Gardening".to_string()),
            Tag::Known(Interest::Arts),
            Tag::Known(Interest::Media),
        ];
        let rooms = vec![summary(interests, 2)];

        // when (操作):
        let result = MessageFormatter::format_rooms(&rooms);

        // then (期待する結果):
        assert!(result.contains("[7] Makers"));
        assert!(result.contains("💻 💼 🏷️ +2"));
        assert!(result.contains("(2 participants)"));
        assert!(!result.contains("🎭"));
    }

    #[test]
    fn test_format_room_joined_without_messages() {
        // テスト項目: 履歴が無いルームでは空状態のメッセージが表示される
        // given (前提条件):
        let room = Room {
            id: RoomId::Number(7),
            name: "Makers".to_string(),
            interests: vec![Tag::Known(Interest::Design)],
            participants: vec![Participant::new("alice", Some(Mood::default()))],
            messages: vec![],
        };

        // when (操作):
        let result = MessageFormatter::format_room_joined(&room, "alice");

        // then (期待する結果):
        assert!(result.contains("# Makers"));
        assert!(result.contains("Interests: Design"));
        assert!(result.contains("1 participants"));
        assert!(result.contains("😊 alice (me)"));
        assert!(result.contains("No messages yet. Be the first to start the conversation!"));
    }

    #[test]
    fn test_format_chat_message_with_mood_and_tags() {
        // テスト項目: 気分・タグ付きのメッセージが正しくフォーマットされる
        // given (前提条件):
        let message = ChatMessage {
            username: "bob".to_string(),
            content: "Hello, world!".to_string(),
            timestamp: Some(Timestamp::new(1672531200000)),
            mood: Some(Mood::new("😎").unwrap()),
            tags: vec![Tag::Known(Interest::Finance), Tag::Other("Web3".to_string())],
        };

        // when (操作):
        let result = MessageFormatter::format_chat_message(&message, "alice");

        // then (期待する結果):
        assert!(result.contains("😎 @bob"));
        assert!(!result.contains("(me)"));
        assert!(result.contains("Hello, world!"));
        assert!(result.contains("[💰 Finance] [🏷️ Web3]"));
    }

    #[test]
    fn test_format_chat_message_from_me_without_extras() {
        // テスト項目: 自分のメッセージには (me) が付き、タグ行は出ない
        // given (前提条件):
        let message = ChatMessage {
            username: "alice".to_string(),
            content: "hi".to_string(),
            timestamp: None,
            mood: None,
            tags: vec![],
        };

        // when (操作):
        let result = MessageFormatter::format_chat_message(&message, "alice");

        // then (期待する結果):
        assert!(result.contains("@alice (me)\nhi\n"));
        assert!(!result.contains('['));
    }

    #[test]
    fn test_format_interests_lists_all() {
        // テスト項目: 16 個の興味タグが全て表示される
        // given (前提条件):

        // when (操作):
        let result = MessageFormatter::format_interests();

        // then (期待する結果):
        assert_eq!(result.lines().count(), 17);
        assert!(result.contains("🏢 Real Estate"));
    }

    #[test]
    fn test_format_field_errors() {
        // テスト項目: フォームのエラーが項目ごとに表示される
        // given (前提条件):
        let errors = WaitlistForm::default().validate();

        // when (操作):
        let result = MessageFormatter::format_field_errors(&errors);

        // then (期待する結果):
        assert_eq!(result.lines().count(), 5);
        assert!(result.contains("interests: Please select at least one interest"));
    }

    #[test]
    fn test_format_connection_state_disconnected() {
        // テスト項目: 切断時は再接続中のメッセージになる
        // given (前提条件):
        let state = ConnectionState::Disconnected;

        // when (操作):
        let result = MessageFormatter::format_connection_state(state);

        // then (期待する結果):
        assert!(result.contains("Attempting to reconnect"));
    }
}
