// ledgerflow-site/src/features/system/dto.rs

use serde::Serialize;

use crate::types::IsoTimestamp;

/// ヘルスチェックレスポンス
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub status: String,
    pub environment: String,
    pub version: String,
    pub timestamp: IsoTimestamp,
}
