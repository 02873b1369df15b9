// ledgerflow-site/src/utils/validation/common.rs

//! 共通バリデーション定数と関数
//!
//! フォームDTO間で重複するバリデーションルールをここに集約します。

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

// =============================================================================
// バリデーション定数
// =============================================================================

/// 必須フィールドの制約
pub mod required {
    pub const MIN_LENGTH: u64 = 1;
}

/// 問い合わせフォームの制約
pub mod contact {
    pub const NAME_MAX_LENGTH: u64 = 120;
    pub const CHALLENGE_MAX_LENGTH: u64 = 2000;
    pub const ADDITIONAL_INFO_MAX_LENGTH: u64 = 4000;
}

/// 料金計算の制約
pub mod pricing {
    pub const MIN_EMPLOYEES: u32 = 1;
    pub const MAX_EMPLOYEES: u32 = 10_000;
}

// =============================================================================
// バリデーション正規表現
// =============================================================================

/// 電話番号（数字・空白・括弧・ハイフン・ドット・先頭の+のみ）
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]{7,20}$").expect("Invalid phone regex"));

// =============================================================================
// カスタムバリデーション関数
// =============================================================================

/// メールアドレスの簡易形式チェック
///
/// ローカル部とドメイン部が一つの`@`で区切られ、ドメインにドットを含むこと。
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // ドメインは「xxx.yyy」形式で、先頭・末尾がドットでないこと
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// 電話番号の形式をバリデーション
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(phone.trim()) {
        let mut error = ValidationError::new("invalid_phone");
        error.message = Some("Phone number format is invalid".into());
        return Err(error);
    }
    Ok(())
}

/// 文字列が空白のみでないかをチェック
pub fn validate_not_empty_or_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("empty_or_whitespace");
        error.message = Some("Field cannot be empty or contain only whitespace".into());
        return Err(error);
    }
    Ok(())
}

// =============================================================================
// テスト
// =============================================================================
