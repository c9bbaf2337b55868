//! Persistence interfaces required by the client.
//!
//! The domain layer owns these traits; the infrastructure layer implements them.

use super::error::StorageError;

/// Storage for the single persisted client value: the username.
///
/// Set once and reused indefinitely. There is no expiry and no server-side
/// reconciliation when two clients pick the same name.
pub trait UsernameStore: Send + Sync {
    /// Load the stored username, `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist the username, replacing any previous value
    fn save(&self, username: &str) -> Result<(), StorageError>;
}
