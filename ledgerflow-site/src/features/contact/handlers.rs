// ledgerflow-site/src/features/contact/handlers.rs

use axum::{extract::State, routing::post, Router};

use super::dto::{
    ConsultationRequest, ConsultationResponse, ContactRequest, ContactSubmissionResponse,
};
use super::service::ContactService;
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::types::ApiResponse;

fn contact_service(app_state: &AppState) -> ContactService {
    ContactService::new(
        app_state.email_sender.clone(),
        app_state.config.notification.operator_email.clone(),
    )
}

/// 問い合わせフォームの送信
pub async fn submit_contact_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactRequest>,
) -> AppResult<ApiResponse<ContactSubmissionResponse>> {
    let response = contact_service(&app_state).submit_lead(payload).await;
    Ok(ApiResponse::success("Contact request received", response))
}

/// 無料相談の予約
pub async fn schedule_consultation_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ConsultationRequest>,
) -> AppResult<ApiResponse<ConsultationResponse>> {
    let response = contact_service(&app_state)
        .schedule_consultation(payload)
        .await;
    Ok(ApiResponse::success("Consultation request received", response))
}

// --- Router ---

pub fn contact_router_with_state(app_state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact_handler))
        .route(
            "/api/contact/consultation",
            post(schedule_consultation_handler),
        )
        .with_state(app_state)
}
