// tests/common/app_helper.rs

use axum::Router;
use ledgerflow_site::api::{build_router, AppState};
use ledgerflow_site::config::AppConfig;
use ledgerflow_site::infrastructure::email::EmailSender;
use std::sync::Arc;

use super::init_test_env;
use super::mock_sender::RecordingSender;

pub const TEST_OPERATOR_EMAIL: &str = "operator@example.com";

/// 記録用の送信者を組み込んだアプリを作成
pub fn setup_app() -> (Router, Arc<RecordingSender>) {
    let sender = Arc::new(RecordingSender::default());
    let app = setup_app_with_sender(sender.clone());
    (app, sender)
}

/// 任意の送信者を組み込んだアプリを作成
pub fn setup_app_with_sender(sender: Arc<dyn EmailSender>) -> Router {
    init_test_env();

    let config = AppConfig::for_testing();
    assert_eq!(config.notification.operator_email, TEST_OPERATOR_EMAIL);

    build_router(AppState::new(config, sender))
}
