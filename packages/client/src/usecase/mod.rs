//! UseCase layer: chat state and its inbound/outbound operations, waitlist submission.

mod chat_action;
mod chat_state;
mod dispatch;
mod error;
mod submit_waitlist;

pub use chat_state::{ChatEvent, ChatState};
pub use error::{ChatActionError, SubmitWaitlistError};
pub use submit_waitlist::{SubmitWaitlistUseCase, WAITLIST_SUCCESS_MESSAGE};
