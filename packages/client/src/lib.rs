//! Netmingle client library.
//!
//! A terminal client for the Netmingle chat rooms over WebSocket, and the
//! waitlist sign-up over REST.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
pub mod connection;
pub mod endpoint;
pub mod error;
