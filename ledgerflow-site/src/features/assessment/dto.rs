// ledgerflow-site/src/features/assessment/dto.rs

use serde::{Deserialize, Serialize};

use super::models::{Question, QUESTIONS};
use super::service::AssessmentAnswers;

/// 採点リクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreAssessmentRequest {
    pub answers: AssessmentAnswers,
}

/// 設問一覧レスポンス
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub total: usize,
    pub questions: &'static [Question],
}

impl QuestionsResponse {
    pub fn current() -> Self {
        Self {
            total: QUESTIONS.len(),
            questions: &QUESTIONS,
        }
    }
}
