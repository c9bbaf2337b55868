//! Error types for the Netmingle client.

use thiserror::Error;

use crate::domain::StorageError;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The configured server address cannot be turned into an endpoint
    #[error("Invalid server URL '{0}'")]
    InvalidServerUrl(String),

    /// No username was stored, given, or entered
    #[error("A username is required to join chat")]
    UsernameRequired,

    /// Username persistence failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The configured reconnect limit was exhausted
    #[error("Failed to reconnect after {0} attempts")]
    ReconnectLimitReached(u32),
}
