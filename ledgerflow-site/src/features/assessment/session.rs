// ledgerflow-site/src/features/assessment/session.rs

//! 一問ずつ進むアセスメントの進行状態

use thiserror::Error;

use super::models::{Question, QUESTIONS};
use super::service::{calculate_score, result_for_score, AssessmentAnswers, AssessmentResult};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Assessment is already complete")]
    AlreadyComplete,

    #[error("Question '{got}' is not the current question '{expected}'")]
    NotCurrentQuestion { expected: &'static str, got: String },

    #[error("Unknown option '{value}' for question '{question_id}'")]
    UnknownOption {
        question_id: &'static str,
        value: String,
    },

    #[error("Missing answer for '{question_id}'")]
    MissingAnswer { question_id: &'static str },
}

/// 回答後の遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentStep {
    /// 次の設問（インデックス）へ進んだ
    Next(usize),
    /// 最後の設問に回答し、結果表示に移った
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentSession {
    current_index: usize,
    answers: AssessmentAnswers,
    completed: bool,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 回答一式を設問順に適用したセッションを作る
    pub fn replay(answers: &AssessmentAnswers) -> Result<Self, SessionError> {
        let mut session = Self::new();
        while let Some(question) = session.current_question() {
            let value = answers
                .get(question.id)
                .ok_or(SessionError::MissingAnswer {
                    question_id: question.id,
                })?;
            session.answer(question.id, value)?;
        }
        Ok(session)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 表示中の設問（完了後は None）
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.completed {
            None
        } else {
            QUESTIONS.get(self.current_index)
        }
    }

    pub fn answers(&self) -> &AssessmentAnswers {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// 表示中の設問に回答する
    pub fn answer(&mut self, question_id: &str, value: &str) -> Result<AssessmentStep, SessionError> {
        let question = self
            .current_question()
            .ok_or(SessionError::AlreadyComplete)?;

        if question.id != question_id {
            return Err(SessionError::NotCurrentQuestion {
                expected: question.id,
                got: question_id.to_string(),
            });
        }

        if question.option(value).is_none() {
            return Err(SessionError::UnknownOption {
                question_id: question.id,
                value: value.to_string(),
            });
        }

        self.answers
            .insert(question.id.to_string(), value.to_string());

        if self.current_index + 1 < QUESTIONS.len() {
            self.current_index += 1;
            Ok(AssessmentStep::Next(self.current_index))
        } else {
            self.completed = true;
            Ok(AssessmentStep::Completed)
        }
    }

    /// 前の設問に戻る。戻れた場合は true
    pub fn go_back(&mut self) -> bool {
        if self.completed || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// 回答済みの割合（0〜100、四捨五入）
    pub fn progress_percent(&self) -> u32 {
        let answered = self.answers.len() as f64;
        ((answered / QUESTIONS.len() as f64) * 100.0).round() as u32
    }

    pub fn result(&self) -> Option<AssessmentResult> {
        self.completed
            .then(|| result_for_score(calculate_score(&self.answers)))
    }

    /// 最初からやり直す
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.answers.clear();
        self.completed = false;
    }
}
