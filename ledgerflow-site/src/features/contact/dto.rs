// ledgerflow-site/src/features/contact/dto.rs

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::models::{
    PreferredContact, BUSINESS_TYPES, DEFAULT_TIMEZONE, SERVICE_INTERESTS, TIME_SLOTS,
};
use crate::utils::validation::common;

// --- リクエストDTO ---

/// 問い合わせフォーム
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(
        length(
            min = common::required::MIN_LENGTH,
            max = common::contact::NAME_MAX_LENGTH,
            message = "Business name is required"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub business_name: String,

    #[validate(
        length(
            min = common::required::MIN_LENGTH,
            max = common::contact::NAME_MAX_LENGTH,
            message = "Contact name is required"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub contact_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = common::validate_phone))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(custom(function = validate_business_type))]
    pub business_type: Option<String>,

    #[serde(default)]
    #[validate(custom(function = validate_service_interest))]
    pub service_interest: Option<String>,

    #[validate(
        length(
            min = common::required::MIN_LENGTH,
            max = common::contact::CHALLENGE_MAX_LENGTH,
            message = "Please describe your biggest bookkeeping challenge"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub primary_challenge: String,

    #[validate(
        length(
            min = common::required::MIN_LENGTH,
            max = common::contact::CHALLENGE_MAX_LENGTH,
            message = "Please describe your second bookkeeping challenge"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub secondary_challenge: String,

    #[serde(default)]
    #[validate(length(
        max = common::contact::ADDITIONAL_INFO_MAX_LENGTH,
        message = "Additional information is too long"
    ))]
    pub additional_info: Option<String>,

    #[serde(default)]
    pub preferred_contact: PreferredContact,
}

/// 無料相談の予約リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    #[validate(custom(function = validate_not_in_past))]
    pub preferred_date: NaiveDate,

    #[validate(custom(function = validate_time_slot))]
    pub time_slot: String,

    #[serde(default = "default_timezone")]
    #[validate(length(
        min = common::required::MIN_LENGTH,
        max = 32,
        message = "Timezone must be between 1 and 32 characters"
    ))]
    pub timezone: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

// --- レスポンスDTO ---

/// 問い合わせ受付レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionResponse {
    pub reference_id: Uuid,
    pub acknowledgement: String,
}

/// 相談予約受付レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationResponse {
    pub reference_id: Uuid,
    pub preferred_date: NaiveDate,
    pub time_slot: String,
    pub timezone: String,
    pub acknowledgement: String,
}

// --- カスタムバリデーション ---

fn one_of(value: &str, allowed: &[&str], code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    Err(error)
}

fn validate_business_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, &BUSINESS_TYPES, "invalid_business_type", "Unknown business type")
}

fn validate_service_interest(value: &str) -> Result<(), ValidationError> {
    one_of(
        value,
        &SERVICE_INTERESTS,
        "invalid_service_interest",
        "Unknown service interest",
    )
}

fn validate_time_slot(value: &str) -> Result<(), ValidationError> {
    one_of(value, &TIME_SLOTS, "invalid_time_slot", "Please select an available time slot")
}

fn validate_not_in_past(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < Utc::now().date_naive() {
        let mut error = ValidationError::new("date_in_past");
        error.message = Some("Preferred date cannot be in the past".into());
        return Err(error);
    }
    Ok(())
}
