// ledgerflow-site/src/api/mod.rs
use crate::config::AppConfig;
use crate::infrastructure::email::EmailSender;
use std::sync::Arc;

pub mod router;

pub use router::build_router;

/// 統一されたアプリケーション状態
///
/// 設定は読み取り専用で、メール送信者は起動時に明示的に生成して注入する。
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub email_sender: Arc<dyn EmailSender>,
}

impl AppState {
    pub fn new(config: AppConfig, email_sender: Arc<dyn EmailSender>) -> Self {
        Self {
            config: Arc::new(config),
            email_sender,
        }
    }
}
