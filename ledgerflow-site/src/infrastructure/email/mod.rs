// ledgerflow-site/src/infrastructure/email/mod.rs

//! メール送信基盤
//!
//! 送信者は `EmailSender` トレイトの実装として明示的に生成し、
//! `AppState` 経由でハンドラーに注入する。現在の実装は `MockEmailSender` のみで、
//! 実際の配送は行わずログ出力と擬似的な遅延だけを行う。

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

use crate::utils::validation::is_valid_email;

/// メール送信エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to send email: {0}")]
    SendError(String),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// メール設定
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// 送信者メールアドレス
    pub from_email: String,
    /// 送信者名
    pub from_name: String,
    /// 擬似的な送信遅延
    pub simulated_latency: Duration,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from_email: "noreply@ledgerflowbookkeeping.com".to_string(),
            from_name: "LedgerFlow Bookkeeping".to_string(),
            simulated_latency: Duration::from_millis(200),
        }
    }
}

impl EmailConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Result<Self, EmailError> {
        let defaults = Self::default();

        let from_email = env::var("EMAIL_FROM").unwrap_or(defaults.from_email);
        let from_name = env::var("EMAIL_FROM_NAME").unwrap_or(defaults.from_name);

        let simulated_latency = match env::var("EMAIL_SIMULATED_LATENCY_MS") {
            Ok(raw) => Duration::from_millis(raw.parse().map_err(|_| {
                EmailError::ConfigurationError(format!(
                    "Invalid EMAIL_SIMULATED_LATENCY_MS value: {}",
                    raw
                ))
            })?),
            Err(_) => defaults.simulated_latency,
        };

        Ok(Self {
            from_email,
            from_name,
            simulated_latency,
        })
    }

    /// 設定の検証
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.from_email.is_empty() {
            return Err(EmailError::ConfigurationError(
                "From email is required".to_string(),
            ));
        }

        if !is_valid_email(&self.from_email) {
            return Err(EmailError::InvalidAddress(self.from_email.clone()));
        }

        Ok(())
    }
}

/// メール送信内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 宛先メールアドレス
    pub to_email: String,
    /// 件名
    pub subject: String,
    /// HTMLボディ
    pub html_body: String,
    /// テキストボディ
    pub text_body: String,
}

impl EmailMessage {
    pub fn from_template(to_email: impl Into<String>, template: EmailTemplate) -> Self {
        Self {
            to_email: to_email.into(),
            subject: template.subject,
            html_body: template.html_body,
            text_body: template.text_body,
        }
    }
}

/// メールテンプレート（件名と二種類の本文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// 送信結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailReceipt {
    pub success: bool,
    pub message_id: String,
}

/// メール送信者
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError>;
}

/// 実際には配送しない送信者（内容をログ出力し、遅延の後に成功を返す）
#[derive(Debug, Clone)]
pub struct MockEmailSender {
    config: EmailConfig,
}

const PREVIEW_LENGTH: usize = 100;

impl MockEmailSender {
    /// 新しいMockEmailSenderを作成
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 環境変数から設定を読み込んでMockEmailSenderを作成
    pub fn from_env() -> Result<Self, EmailError> {
        let config = EmailConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    fn log_email(&self, message: &EmailMessage) {
        info!(
            from = %format!("{} <{}>", self.config.from_name, self.config.from_email),
            to_email = %message.to_email,
            subject = %message.subject,
            preview = %preview(&message.text_body),
            "Email would be sent (mock sender)"
        );
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        if !is_valid_email(&message.to_email) {
            error!(to_email = %message.to_email, "Email sending failed: invalid recipient");
            return Err(EmailError::InvalidAddress(message.to_email));
        }

        self.log_email(&message);

        tokio::time::sleep(self.config.simulated_latency).await;

        let receipt = EmailReceipt {
            success: true,
            message_id: generate_message_id(),
        };

        info!(
            to_email = %message.to_email,
            message_id = %receipt.message_id,
            "Mock email accepted"
        );

        Ok(receipt)
    }
}

/// `mock-message-<unix millis>-<base36 9文字>` 形式のIDを生成
fn generate_message_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    format!("mock-message-{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// ログ用の本文プレビュー
fn preview(text: &str) -> String {
    let trimmed = text.trim_start();
    let head: String = trimmed.chars().take(PREVIEW_LENGTH).collect();
    format!("{}...", head)
}
