// ledgerflow-site/src/features/assessment/models.rs

//! 簿記課題アセスメントの設問と推奨内容

use serde::{Deserialize, Serialize};

/// 選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
    pub weight: u32,
}

/// 設問
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&'static AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn max_weight(&self) -> u32 {
        self.options.iter().map(|option| option.weight).max().unwrap_or(0)
    }
}

const fn opt(value: &'static str, label: &'static str, weight: u32) -> AnswerOption {
    AnswerOption {
        value,
        label,
        weight,
    }
}

/// 表示順に並んだ全設問
pub static QUESTIONS: [Question; 5] = [
    Question {
        id: "frequency",
        prompt: "How often do you currently update your books?",
        options: &[
            opt("daily", "Daily", 1),
            opt("weekly", "Weekly", 2),
            opt("monthly", "Monthly", 3),
            opt("quarterly", "Quarterly or less", 4),
        ],
    },
    Question {
        id: "accuracy",
        prompt: "How confident are you in your bookkeeping accuracy?",
        options: &[
            opt("very-confident", "Very confident", 1),
            opt("somewhat-confident", "Somewhat confident", 2),
            opt("not-confident", "Not confident", 3),
            opt("no-idea", "I have no idea", 4),
        ],
    },
    Question {
        id: "time-spent",
        prompt: "How much time do you spend on bookkeeping per week?",
        options: &[
            opt("none", "None (I avoid it)", 4),
            opt("1-3", "1-3 hours", 2),
            opt("4-8", "4-8 hours", 3),
            opt("8-plus", "8+ hours", 4),
        ],
    },
    Question {
        id: "tax-stress",
        prompt: "How stressful is tax time for your business?",
        options: &[
            opt("not-stressful", "Not stressful at all", 1),
            opt("somewhat-stressful", "Somewhat stressful", 2),
            opt("very-stressful", "Very stressful", 3),
            opt("nightmare", "Complete nightmare", 4),
        ],
    },
    Question {
        id: "cash-flow",
        prompt: "How well do you understand your business cash flow?",
        options: &[
            opt("excellent", "Excellent understanding", 1),
            opt("good", "Good understanding", 2),
            opt("poor", "Poor understanding", 3),
            opt("clueless", "I'm completely clueless", 4),
        ],
    },
];

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}

/// スコア帯
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentBand {
    Low,
    Medium,
    High,
}

/// 「低」帯の上限スコア（含む）
pub const LOW_BAND_MAX: u32 = 8;
/// 「中」帯の上限スコア（含む）
pub const MEDIUM_BAND_MAX: u32 = 15;

impl AssessmentBand {
    pub fn from_score(score: u32) -> Self {
        if score <= LOW_BAND_MAX {
            Self::Low
        } else if score <= MEDIUM_BAND_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        match self {
            Self::Low => Recommendation {
                level: "Low Priority",
                description: "Your bookkeeping seems to be in good shape! Consider our consultation services for optimization.",
                services: &["Business Planning", "Financial Analysis", "Quarterly Reviews"],
            },
            Self::Medium => Recommendation {
                level: "Medium Priority",
                description: "There are some areas where professional bookkeeping help could save you time and reduce stress.",
                services: &["Monthly Bookkeeping", "Tax Preparation", "Financial Statements"],
            },
            Self::High => Recommendation {
                level: "High Priority",
                description: "Your bookkeeping challenges are significant. Professional help is strongly recommended.",
                services: &[
                    "Complete Bookkeeping Overhaul",
                    "Monthly Services",
                    "Tax Prep",
                    "Cash Flow Analysis",
                ],
            },
        }
    }
}

/// スコア帯ごとの定型推奨内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub level: &'static str,
    pub description: &'static str,
    pub services: &'static [&'static str],
}
