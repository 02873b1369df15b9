// ledgerflow-site/src/features/account/handlers.rs

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use super::dto::{CancelAccountRequest, CancelAccountResponse};
use super::service::CancellationService;
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::extractors::AppJson;

/// アカウント解約
pub async fn cancel_account_handler(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CancelAccountRequest>,
) -> AppResult<Json<CancelAccountResponse>> {
    let service = CancellationService::new(
        app_state.email_sender.clone(),
        app_state.config.notification.operator_email.clone(),
    );

    match service.cancel_account(payload).await {
        Ok(response) => Ok(Json(response)),
        Err(e @ AppError::ValidationError(_)) => Err(e),
        Err(e) => {
            error!(error = %e, "Account cancellation failed");
            Err(AppError::OperationFailed(
                "Failed to cancel account".to_string(),
            ))
        }
    }
}

// --- Router ---

pub fn account_router_with_state(app_state: AppState) -> Router {
    Router::new()
        .route("/api/account/cancel", post(cancel_account_handler))
        .route_layer(CatchPanicLayer::custom(cancellation_panic))
        .with_state(app_state)
}

/// 解約処理中のパニックも解約失敗として返す
fn cancellation_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());

    error!(panic = %detail, "Account cancellation panicked");
    AppError::OperationFailed("Failed to cancel account".to_string()).into_response()
}
