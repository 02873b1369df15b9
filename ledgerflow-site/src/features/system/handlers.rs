// ledgerflow-site/src/features/system/handlers.rs

use axum::{extract::State, routing::get, Router};

use super::dto::HealthCheckResponse;
use crate::api::AppState;
use crate::types::{ApiResponse, IsoTimestamp};

pub async fn health_check(State(app_state): State<AppState>) -> ApiResponse<HealthCheckResponse> {
    ApiResponse::success(
        "Health check completed",
        HealthCheckResponse {
            status: "healthy".to_string(),
            environment: app_state.config.environment.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: IsoTimestamp::now(),
        },
    )
}

// --- Router ---

pub fn system_router_with_state(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(app_state)
}
