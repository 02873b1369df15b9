// ledgerflow-site/src/features/assessment/service.rs

use serde::Serialize;
use std::collections::BTreeMap;

use super::models::{find_question, AssessmentBand, Recommendation, QUESTIONS};
use super::session::AssessmentSession;
use crate::error::{AppError, AppResult};

/// 設問ID → 選択肢の値
pub type AssessmentAnswers = BTreeMap<String, String>;

/// 採点結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub score: u32,
    pub max_score: u32,
    pub band: AssessmentBand,
    pub recommendation: Recommendation,
}

/// 選ばれた選択肢の重みを合計する
///
/// 未知の設問・選択肢は無視する。
pub fn calculate_score(answers: &AssessmentAnswers) -> u32 {
    answers
        .iter()
        .filter_map(|(question_id, value)| {
            find_question(question_id)
                .and_then(|question| question.option(value))
                .map(|option| option.weight)
        })
        .sum()
}

pub fn max_score() -> u32 {
    QUESTIONS.iter().map(|question| question.max_weight()).sum()
}

pub fn result_for_score(score: u32) -> AssessmentResult {
    let band = AssessmentBand::from_score(score);
    AssessmentResult {
        score,
        max_score: max_score(),
        band,
        recommendation: band.recommendation(),
    }
}

/// 回答一式を検証して採点する
pub fn evaluate(answers: &AssessmentAnswers) -> AppResult<AssessmentResult> {
    let mut errors = Vec::new();

    for (question_id, value) in answers {
        match find_question(question_id) {
            None => errors.push(format!("answers: Unknown question '{}'", question_id)),
            Some(question) if question.option(value).is_none() => errors.push(format!(
                "answers: Unknown option '{}' for question '{}'",
                value, question_id
            )),
            Some(_) => {}
        }
    }

    for question in &QUESTIONS {
        if !answers.contains_key(question.id) {
            errors.push(format!("answers: Missing answer for '{}'", question.id));
        }
    }

    if !errors.is_empty() {
        return Err(AppError::ValidationErrors(errors));
    }

    let session = AssessmentSession::replay(answers)
        .map_err(|e| AppError::ValidationError(format!("answers: {}", e)))?;

    session
        .result()
        .ok_or_else(|| AppError::ValidationError("answers: Assessment is incomplete".to_string()))
}
