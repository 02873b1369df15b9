// ledgerflow-site/src/features/assessment/handlers.rs

use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;

use super::dto::{QuestionsResponse, ScoreAssessmentRequest};
use super::service::{evaluate, AssessmentResult};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::AppJson;
use crate::types::ApiResponse;

/// 設問一覧を取得
pub async fn get_questions_handler() -> ApiResponse<QuestionsResponse> {
    ApiResponse::success("Assessment questions retrieved", QuestionsResponse::current())
}

/// 回答を採点して推奨内容を返す
pub async fn score_assessment_handler(
    AppJson(payload): AppJson<ScoreAssessmentRequest>,
) -> AppResult<ApiResponse<AssessmentResult>> {
    let result = evaluate(&payload.answers)?;

    info!(
        score = result.score,
        band = ?result.band,
        "Assessment scored"
    );

    Ok(ApiResponse::success("Assessment scored", result))
}

// --- Router ---

pub fn assessment_router_with_state(app_state: AppState) -> Router {
    Router::new()
        .route("/api/assessment/questions", get(get_questions_handler))
        .route("/api/assessment/score", post(score_assessment_handler))
        .with_state(app_state)
}
