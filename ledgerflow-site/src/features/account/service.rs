// ledgerflow-site/src/features/account/service.rs

use std::sync::Arc;
use tracing::{info, warn};

use super::dto::{CancelAccountRequest, CancelAccountResponse};
use super::templates::cancellation_confirmation;
use crate::error::{AppError, AppResult};
use crate::infrastructure::email::{EmailError, EmailMessage, EmailReceipt, EmailSender};
use crate::types::IsoTimestamp;

pub struct CancellationService {
    email_sender: Arc<dyn EmailSender>,
    operator_email: String,
}

impl CancellationService {
    pub fn new(email_sender: Arc<dyn EmailSender>, operator_email: impl Into<String>) -> Self {
        Self {
            email_sender,
            operator_email: operator_email.into(),
        }
    }

    /// アカウントを解約し、確認メールを送信する
    ///
    /// 確認メールの送信失敗はログに記録するが、解約自体は成功として扱う。
    pub async fn cancel_account(
        &self,
        request: CancelAccountRequest,
    ) -> AppResult<CancelAccountResponse> {
        let user_id = non_blank(request.user_id.as_deref())
            .ok_or_else(|| AppError::ValidationError("User ID is required".to_string()))?;

        let cancelled_at = IsoTimestamp::now();

        info!(
            user_id = %user_id,
            reason = %non_blank(request.reason.as_deref()).unwrap_or("not provided"),
            cancelled_at = %cancelled_at,
            "Account cancellation requested"
        );

        let recipient = self.recipient_for(request.confirmation_email.as_deref());

        match self
            .send_confirmation(user_id, cancelled_at, recipient)
            .await
        {
            Ok(receipt) => {
                info!(
                    user_id = %user_id,
                    message_id = %receipt.message_id,
                    "Cancellation confirmation email sent"
                );
            }
            Err(e) => {
                // メール送信失敗はログに記録するが、処理は継続
                warn!(user_id = %user_id, error = %e, "Failed to send cancellation email");
            }
        }

        Ok(CancelAccountResponse::completed(cancelled_at))
    }

    /// 確認メールの宛先（未指定の場合はオペレーター宛）
    pub fn recipient_for<'a>(&'a self, confirmation_email: Option<&'a str>) -> &'a str {
        non_blank(confirmation_email).unwrap_or(self.operator_email.as_str())
    }

    async fn send_confirmation(
        &self,
        user_id: &str,
        cancelled_at: IsoTimestamp,
        recipient: &str,
    ) -> Result<EmailReceipt, EmailError> {
        let template = cancellation_confirmation(user_id, cancelled_at, recipient);
        self.email_sender
            .send(EmailMessage::from_template(recipient, template))
            .await
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
