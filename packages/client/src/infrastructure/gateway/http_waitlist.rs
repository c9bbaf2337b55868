//! reqwest を使った WaitlistGateway 実装
//!
//! ## 責務
//!
//! - フォームを JSON ボディに変換して `POST /api/waitlist` に送信
//! - 2xx 以外のレスポンスから `{message}` を取り出してエラーにする

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    domain::{GatewayError, WaitlistForm, WaitlistGateway},
    infrastructure::dto::http::{WaitlistErrorDto, WaitlistRequestDto},
};

/// Message used when the server rejects the request without saying why
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to join waitlist";

/// HTTP implementation of [`WaitlistGateway`]
pub struct HttpWaitlistGateway {
    client: Client,
    endpoint: Url,
}

impl HttpWaitlistGateway {
    /// Create a gateway posting to `endpoint` (normally built with
    /// [`crate::endpoint::waitlist_url`]).
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl WaitlistGateway for HttpWaitlistGateway {
    async fn submit(&self, form: &WaitlistForm) -> Result<(), GatewayError> {
        let body = WaitlistRequestDto::from(form);

        tracing::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Waitlist submission accepted ({})", status);
            return Ok(());
        }

        // The body may be missing or not JSON; fall back to the generic text
        let error_body = response
            .json::<WaitlistErrorDto>()
            .await
            .unwrap_or_default();
        let message = error_body
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());

        tracing::warn!("Waitlist submission rejected ({}): {}", status, message);
        Err(GatewayError::Rejected(message))
    }
}
