//! Connection lifecycle states and the events a session reports to the UI.

use std::fmt;

use crate::usecase::ChatEvent;

/// `Disconnected → Connecting → Connected → Disconnected`, looping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
        };
        f.write_str(label)
    }
}

/// Output of the connection layer, consumed by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    State(ConnectionState),
    Chat(ChatEvent),
    /// A one-line message for the user (validation errors, hints)
    Notice(String),
}
