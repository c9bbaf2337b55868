//! Outbound gateway implementations
//!
//! - `http_waitlist`: reqwest-based `WaitlistGateway`

pub mod http_waitlist;

pub use http_waitlist::HttpWaitlistGateway;
