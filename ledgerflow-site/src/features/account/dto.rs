// ledgerflow-site/src/features/account/dto.rs

use serde::{Deserialize, Serialize};

use crate::types::IsoTimestamp;

// --- リクエストDTO ---

/// アカウント解約リクエスト
///
/// `userId` の必須チェックはサービス層で行い、専用のメッセージを返す。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAccountRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub confirmation_email: Option<String>,
}

// --- レスポンスDTO ---

/// アカウント解約レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAccountResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<IsoTimestamp>,
}

impl CancelAccountResponse {
    pub fn completed(cancelled_at: IsoTimestamp) -> Self {
        Self {
            success: true,
            message: "Account cancellation completed successfully".to_string(),
            cancelled_at: Some(cancelled_at),
        }
    }
}
