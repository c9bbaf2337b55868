//! Runtime configuration for the chat client.

use std::time::Duration;

/// Default delay between reconnect attempts
pub const DEFAULT_RECONNECT_INTERVAL_SECS: u64 = 5;

/// Default HTTP(S) or WS(S) base address of the server
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

/// Fixed-interval reconnect policy. No backoff, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub interval: Duration,
    /// Cap on consecutive failed connection attempts; `None` retries forever
    pub max_attempts: Option<u32>,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_RECONNECT_INTERVAL_SECS),
            max_attempts: None,
        }
    }
}

impl ReconnectPolicy {
    pub fn new(interval: Duration, max_attempts: Option<u32>) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Whether another attempt may follow `failures` consecutive failures
    pub fn should_attempt_reconnect(&self, failures: u32) -> bool {
        self.max_attempts.is_none_or(|max| failures < max)
    }
}

/// Everything the connection runner needs besides the chat state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub server: String,
    pub reconnect: ReconnectPolicy,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            reconnect: ReconnectPolicy::default(),
        }
    }
}
