use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::utils::validation::is_valid_email;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub body_limit: usize,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct NotificationConfig {
    /// 確認メールの宛先未指定時のフォールバック先、および新規リードの通知先
    pub operator_email: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub server: ServerConfig,
    pub notification: NotificationConfig,
}

const DEFAULT_OPERATOR_EMAIL: &str = "info@ledgerflowbookkeeping.com";

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let request_timeout_secs: u64 = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| "Invalid REQUEST_TIMEOUT_SECS value")?;

        let operator_email = env::var("OPERATOR_NOTIFICATION_EMAIL")
            .unwrap_or_else(|_| DEFAULT_OPERATOR_EMAIL.to_string());
        if !is_valid_email(&operator_email) {
            return Err(format!(
                "Invalid OPERATOR_NOTIFICATION_EMAIL value: {}",
                operator_email
            ));
        }

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            server: ServerConfig {
                body_limit: 1024 * 1024, // 1MB
                request_timeout: Duration::from_secs(request_timeout_secs),
            },
            notification: NotificationConfig {
                operator_email: operator_email.trim().to_string(),
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_test(&self) -> bool {
        self.environment == "test"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            server: ServerConfig {
                body_limit: 1024 * 1024,
                request_timeout: Duration::from_secs(5),
            },
            notification: NotificationConfig {
                operator_email: "operator@example.com".to_string(),
            },
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
