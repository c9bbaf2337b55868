//! Value objects for the chat and waitlist domain.

use std::{fmt, str::FromStr};

use super::error::ValueObjectError;

/// Emoji shown for tags outside the fixed interest vocabulary.
pub const FALLBACK_TAG_EMOJI: &str = "🏷️";

/// Default mood for participants that never picked one.
pub const DEFAULT_MOOD: &str = "😊";

/// Fixed interest vocabulary shared by rooms, message tags and the waitlist form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Interest {
    Technology,
    Business,
    Marketing,
    Design,
    Finance,
    Healthcare,
    Education,
    Engineering,
    Research,
    Sales,
    HR,
    Legal,
    Consulting,
    RealEstate,
    Media,
    Arts,
}

impl Interest {
    /// All interests in display order.
    pub const ALL: [Interest; 16] = [
        Interest::Technology,
        Interest::Business,
        Interest::Marketing,
        Interest::Design,
        Interest::Finance,
        Interest::Healthcare,
        Interest::Education,
        Interest::Engineering,
        Interest::Research,
        Interest::Sales,
        Interest::HR,
        Interest::Legal,
        Interest::Consulting,
        Interest::RealEstate,
        Interest::Media,
        Interest::Arts,
    ];

    /// Wire / display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Technology => "Technology",
            Interest::Business => "Business",
            Interest::Marketing => "Marketing",
            Interest::Design => "Design",
            Interest::Finance => "Finance",
            Interest::Healthcare => "Healthcare",
            Interest::Education => "Education",
            Interest::Engineering => "Engineering",
            Interest::Research => "Research",
            Interest::Sales => "Sales",
            Interest::HR => "HR",
            Interest::Legal => "Legal",
            Interest::Consulting => "Consulting",
            Interest::RealEstate => "Real Estate",
            Interest::Media => "Media",
            Interest::Arts => "Arts",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Interest::Technology => "💻",
            Interest::Business => "💼",
            Interest::Marketing => "📊",
            Interest::Design => "🎨",
            Interest::Finance => "💰",
            Interest::Healthcare => "🏥",
            Interest::Education => "📚",
            Interest::Engineering => "⚙️",
            Interest::Research => "🔬",
            Interest::Sales => "🛒",
            Interest::HR => "👥",
            Interest::Legal => "⚖️",
            Interest::Consulting => "💭",
            Interest::RealEstate => "🏢",
            Interest::Media => "📱",
            Interest::Arts => "🎭",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interest {
    type Err = ValueObjectError;

    /// Matches labels case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Interest::ALL
            .iter()
            .copied()
            .find(|interest| interest.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValueObjectError::UnknownInterest(needle.to_string()))
    }
}

/// A tag attached to a room or a message.
///
/// Servers may send labels outside the fixed vocabulary; those are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Known(Interest),
    Other(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Known(interest) => interest.as_str(),
            Tag::Other(label) => label,
        }
    }

    pub fn emoji(&self) -> &str {
        match self {
            Tag::Known(interest) => interest.emoji(),
            Tag::Other(_) => FALLBACK_TAG_EMOJI,
        }
    }
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        // Exact match only: the server echoes labels we sent
        match Interest::ALL.iter().find(|i| i.as_str() == label) {
            Some(interest) => Tag::Known(*interest),
            None => Tag::Other(label),
        }
    }
}

impl From<Interest> for Tag {
    fn from(interest: Interest) -> Self {
        Tag::Known(interest)
    }
}

/// A participant's mood: a single non-empty emoji string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mood(String);

impl Mood {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyMood);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build a mood from typed input, which must be exactly one emoji.
    ///
    /// Moods received from the server go through [`Mood::new`] instead.
    pub fn from_input(value: &str) -> Result<Self, ValueObjectError> {
        let mood = Self::new(value)?;
        let has_text = mood
            .0
            .chars()
            .any(|c| c.is_whitespace() || c.is_alphabetic());
        if has_text || emoji_count(&mood.0) != 1 {
            return Err(ValueObjectError::NotSingleEmoji(mood.0));
        }
        Ok(mood)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Count emoji, folding modifiers, ZWJ sequences and flag pairs into one.
fn emoji_count(value: &str) -> usize {
    let mut count = 0;
    let mut joined = false;
    let mut open_flag = false;

    for c in value.chars() {
        match c {
            '\u{200D}' => joined = true,
            // variation selectors, keycap, skin tones, tag sequences
            '\u{FE0E}' | '\u{FE0F}' | '\u{20E3}' | '\u{1F3FB}'..='\u{1F3FF}'
            | '\u{E0020}'..='\u{E007F}' => {}
            '\u{1F1E6}'..='\u{1F1FF}' if open_flag => open_flag = false,
            _ => {
                open_flag = ('\u{1F1E6}'..='\u{1F1FF}').contains(&c);
                if joined {
                    joined = false;
                } else {
                    count += 1;
                }
            }
        }
    }

    count
}

impl Default for Mood {
    fn default() -> Self {
        Self(DEFAULT_MOOD.to_string())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room identifier as assigned by the server.
///
/// The server may use either strings or numbers; the received form is kept so
/// that `joinRoom` echoes it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomId {
    Text(String),
    Number(i64),
}

impl RoomId {
    /// Parse user input: digits become a numeric id, anything else stays text.
    pub fn parse(input: &str) -> Result<Self, ValueObjectError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyRoomId);
        }
        Ok(match trimmed.parse::<i64>() {
            Ok(number) => RoomId::Number(number),
            Err(_) => RoomId::Text(trimmed.to_string()),
        })
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomId::Text(text) => f.write_str(text),
            RoomId::Number(number) => write!(f, "{}", number),
        }
    }
}

/// The local user's display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyUsername);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_vocabulary_has_sixteen_unique_labels() {
        // テスト項目: 興味タグの語彙が 16 個で重複がない
        // given (前提条件):
        let labels: Vec<&str> = Interest::ALL.iter().map(|i| i.as_str()).collect();

        // when (操作):
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();

        // then (期待する結果):
        assert_eq!(labels.len(), 16);
        assert_eq!(deduped.len(), 16);
        assert_eq!(labels[0], "Technology");
        assert_eq!(labels[15], "Arts");
    }

    #[test]
    fn test_interest_from_str_is_case_insensitive() {
        // テスト項目: 大文字小文字・前後の空白を無視して興味タグを解析できる
        // given (前提条件):
        let input = "  real estate ";

        // when (操作):
        let result = input.parse::<Interest>();

        // then (期待する結果):
        assert_eq!(result, Ok(Interest::RealEstate));
    }

    #[test]
    fn test_interest_from_str_rejects_unknown() {
        // テスト項目: 語彙に無いタグはエラーになる
        // given (前提条件):
        let input = "Cooking";

        // when (操作):
        let result = input.parse::<Interest>();

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValueObjectError::UnknownInterest("Cooking".to_string()))
        );
    }

    #[test]
    fn test_tag_from_unknown_label_uses_fallback_emoji() {
        // テスト項目: 未知のタグはそのまま保持され、フォールバック絵文字になる
        // given (前提条件):
        let label = "Gardening".to_string();

        // when (操作):
        let tag = Tag::from(label);

        // then (期待する結果):
        assert_eq!(tag, Tag::Other("Gardening".to_string()));
        assert_eq!(tag.emoji(), FALLBACK_TAG_EMOJI);
    }

    #[test]
    fn test_tag_from_known_label() {
        // テスト項目: 既知のタグは Interest に対応付けられる
        // given (前提条件):
        let label = "Legal".to_string();

        // when (操作):
        let tag = Tag::from(label);

        // then (期待する結果):
        assert_eq!(tag, Tag::Known(Interest::Legal));
        assert_eq!(tag.emoji(), "⚖️");
    }

    #[test]
    fn test_mood_from_input_accepts_single_emoji() {
        // テスト項目: 修飾子・ZWJ・国旗を含む 1 つの絵文字は受け付けられる
        // given (前提条件):
        let inputs = ["😊", " 🔥 ", "❤️", "👍🏽", "👨‍👩‍👧", "🇯🇵", "1️⃣"];

        // when (操作):
        let results: Vec<bool> = inputs
            .iter()
            .map(|input| Mood::from_input(input).is_ok())
            .collect();

        // then (期待する結果):
        assert!(results.iter().all(|ok| *ok), "{:?}", results);
        assert_eq!(Mood::from_input(" 🔥 ").unwrap().as_str(), "🔥");
    }

    #[test]
    fn test_mood_from_input_rejects_text_and_sequences() {
        // テスト項目: 文章・複数の絵文字・空白入りの入力は拒否される
        // given (前提条件):
        let inputs = ["feeling great", "ok", "😊😊", "😊 🔥", "🇯🇵🇫🇷"];

        // when (操作):
        let results: Vec<_> = inputs.iter().map(|input| Mood::from_input(input)).collect();

        // then (期待する結果):
        for (input, result) in inputs.iter().zip(results) {
            assert_eq!(
                result,
                Err(ValueObjectError::NotSingleEmoji(input.to_string())),
                "{}",
                input
            );
        }
        assert_eq!(Mood::from_input("  "), Err(ValueObjectError::EmptyMood));
    }

    #[test]
    fn test_mood_new_stays_lenient_for_server_values() {
        // テスト項目: サーバーから届く気分は文字列のまま受け付けられる
        // given (前提条件):
        let value = "feeling great";

        // when (操作):
        let mood = Mood::new(value);

        // then (期待する結果):
        assert_eq!(mood.map(Mood::into_string), Ok("feeling great".to_string()));
    }

    #[test]
    fn test_mood_default_is_smiley() {
        // テスト項目: デフォルトの気分は 😊
        // given (前提条件):

        // when (操作):
        let mood = Mood::default();

        // then (期待する結果):
        assert_eq!(mood.as_str(), "😊");
    }

    #[test]
    fn test_mood_rejects_blank() {
        // テスト項目: 空白のみの気分はエラーになる
        // given (前提条件):
        let input = "   ";

        // when (操作):
        let result = Mood::new(input);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyMood));
    }

    #[test]
    fn test_room_id_parse_numeric_and_text() {
        // テスト項目: 数字のみの ID は数値、それ以外は文字列として扱われる
        // given (前提条件):
        let numeric = "1700000000000";
        let text = "room-abc";

        // when (操作):
        let numeric_id = RoomId::parse(numeric);
        let text_id = RoomId::parse(text);

        // then (期待する結果):
        assert_eq!(numeric_id, Ok(RoomId::Number(1700000000000)));
        assert_eq!(text_id, Ok(RoomId::Text("room-abc".to_string())));
    }

    #[test]
    fn test_room_id_parse_rejects_empty() {
        // テスト項目: 空のルーム ID はエラーになる
        // given (前提条件):
        let input = " ";

        // when (操作):
        let result = RoomId::parse(input);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyRoomId));
    }

    #[test]
    fn test_username_is_trimmed() {
        // テスト項目: ユーザー名の前後の空白が除去される
        // given (前提条件):
        let input = "  alice \n";

        // when (操作):
        let result = Username::new(input);

        // then (期待する結果):
        assert_eq!(result.map(|u| u.as_str().to_string()), Ok("alice".to_string()));
    }
}
