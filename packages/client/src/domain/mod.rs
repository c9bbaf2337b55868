//! Domain layer: value objects, entities, form validation and the
//! interfaces the outer layers implement.

pub mod entity;
pub mod error;
pub mod form;
pub mod gateway;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, MAX_ROOM_INTERESTS, Participant, Room, RoomDraft, RoomSummary};
pub use error::{GatewayError, RoomDraftError, StorageError, ValueObjectError};
pub use form::{
    ContactForm, FieldErrors, PROFESSIONS, WaitlistForm, is_valid_email,
    validate_newsletter_email,
};
pub use gateway::WaitlistGateway;
pub use repository::UsernameStore;
pub use value_object::{
    DEFAULT_MOOD, FALLBACK_TAG_EMOJI, Interest, Mood, RoomId, Tag, Timestamp, Username,
};
