//! UseCase: waitlist submission
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SubmitWaitlistUseCase::execute()
//!
//! ### なぜこのテストが必要か
//! - 検証エラー時にネットワーク呼び出しが発生しないことを保証
//! - 正常時に gateway がちょうど 1 回呼ばれることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：全項目入力済み
//! - 異常系：興味タグ未選択、サーバー拒否、通信失敗

use std::sync::Arc;

use crate::domain::{WaitlistForm, WaitlistGateway};

use super::error::SubmitWaitlistError;

/// Text shown after a successful submission
pub const WAITLIST_SUCCESS_MESSAGE: &str =
    "Successfully joined waitlist! We'll notify you when we launch.";

/// ウェイトリスト登録のユースケース
pub struct SubmitWaitlistUseCase {
    /// Gateway（送信先の抽象化）
    gateway: Arc<dyn WaitlistGateway>,
}

impl SubmitWaitlistUseCase {
    pub fn new(gateway: Arc<dyn WaitlistGateway>) -> Self {
        Self { gateway }
    }

    /// Validate the form, then submit it once.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the server accepted the submission
    /// * `Err(SubmitWaitlistError::Invalid)` - validation failed; nothing was sent
    /// * `Err(_)` - the server rejected it or the request failed
    pub async fn execute(&self, form: &WaitlistForm) -> Result<(), SubmitWaitlistError> {
        let errors = form.validate();
        if !errors.is_empty() {
            tracing::debug!("Waitlist form rejected locally: {:?}", errors);
            return Err(SubmitWaitlistError::Invalid(errors));
        }

        self.gateway.submit(form).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GatewayError, Interest, gateway::MockWaitlistGateway};

    fn create_valid_form() -> WaitlistForm {
        WaitlistForm {
            full_name: "Alice Liddell".to_string(),
            email: "user@example.com".to_string(),
            profession: "Software Engineer".to_string(),
            location: "Tokyo".to_string(),
            interests: vec![Interest::Technology, Interest::Research],
        }
    }

    #[tokio::test]
    async fn test_submit_valid_form_calls_gateway_once() {
        // テスト項目: 全項目入力済みなら gateway がちょうど 1 回呼ばれる
        // given (前提条件):
        let form = create_valid_form();
        let expected = form.clone();
        let mut gateway = MockWaitlistGateway::new();
        gateway
            .expect_submit()
            .withf(move |submitted| submitted == &expected)
            .times(1)
            .returning(|_| Ok(()));
        let usecase = SubmitWaitlistUseCase::new(Arc::new(gateway));

        // when (操作):
        let result = usecase.execute(&form).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_submit_without_interests_makes_no_call() {
        // テスト項目: 興味タグ未選択ならエラーになり、gateway は呼ばれない
        // given (前提条件):
        let form = WaitlistForm {
            interests: vec![],
            ..create_valid_form()
        };
        let mut gateway = MockWaitlistGateway::new();
        gateway.expect_submit().times(0);
        let usecase = SubmitWaitlistUseCase::new(Arc::new(gateway));

        // when (操作):
        let result = usecase.execute(&form).await;

        // then (期待する結果):
        let Err(SubmitWaitlistError::Invalid(errors)) = result else {
            panic!("expected validation error, got {:?}", result);
        };
        assert_eq!(
            errors.get("interests"),
            Some("Please select at least one interest")
        );
    }

    #[tokio::test]
    async fn test_submit_rejected_by_server() {
        // テスト項目: サーバーが拒否した場合はそのメッセージが返される
        // given (前提条件):
        let form = create_valid_form();
        let mut gateway = MockWaitlistGateway::new();
        gateway
            .expect_submit()
            .times(1)
            .returning(|_| Err(GatewayError::Rejected("Email already registered".to_string())));
        let usecase = SubmitWaitlistUseCase::new(Arc::new(gateway));

        // when (操作):
        let result = usecase.execute(&form).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SubmitWaitlistError::Rejected(
                "Email already registered".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_submit_transport_failure() {
        // テスト項目: 通信失敗は Transport エラーになる
        // given (前提条件):
        let form = create_valid_form();
        let mut gateway = MockWaitlistGateway::new();
        gateway
            .expect_submit()
            .times(1)
            .returning(|_| Err(GatewayError::Transport("connection refused".to_string())));
        let usecase = SubmitWaitlistUseCase::new(Arc::new(gateway));

        // when (操作):
        let result = usecase.execute(&form).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SubmitWaitlistError::Transport(
                "Waitlist request failed: connection refused".to_string()
            ))
        );
    }
}
