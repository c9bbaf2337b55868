//! Data Transfer Objects (DTOs) for the chat and waitlist clients.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket envelope DTOs
//! - `http`: waitlist API request/response DTOs

pub mod conversion;
pub mod http;
pub mod websocket;
