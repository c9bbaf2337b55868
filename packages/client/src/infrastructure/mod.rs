//! Infrastructure layer: wire DTOs, the HTTP waitlist gateway and username storage.

pub mod dto;
pub mod gateway;
pub mod storage;
