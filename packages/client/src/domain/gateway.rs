//! Outbound gateway interfaces.

use async_trait::async_trait;

use super::{error::GatewayError, form::WaitlistForm};

/// Waitlist submission gateway
///
/// The use case depends on this trait rather than on the HTTP client, so
/// validation can be tested without a network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WaitlistGateway: Send + Sync {
    /// Submit an already validated form
    async fn submit(&self, form: &WaitlistForm) -> Result<(), GatewayError>;
}
