// ledgerflow-site/src/main.rs
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ledgerflow_site::api::{build_router, AppState};
use ledgerflow_site::config::AppConfig;
use ledgerflow_site::infrastructure::email::MockEmailSender;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerflow_site=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting LedgerFlow site server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        operator_email = %app_config.notification.operator_email,
        "Configuration loaded"
    );

    // メール送信者（実配送は行わない）
    let email_sender = MockEmailSender::from_env()?;
    tracing::info!(
        from_email = %email_sender.config().from_email,
        latency_ms = email_sender.config().simulated_latency.as_millis() as u64,
        "Mock email sender initialized"
    );

    let server_addr = app_config.server_addr();
    let app_state = AppState::new(app_config, Arc::new(email_sender));

    // ルーターの設定
    let app_router = build_router(app_state);

    // サーバーの起動
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
