// ledgerflow-site/src/api/router.rs

use axum::{
    http::Uri,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::AppState;
use crate::error::AppError;
use crate::features::{
    account::handlers::account_router_with_state,
    assessment::handlers::assessment_router_with_state,
    contact::handlers::contact_router_with_state,
    pages::handlers::{not_found_page, pages_router_with_state},
    pricing::handlers::pricing_router_with_state,
    system::handlers::system_router_with_state,
};
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::{cors_layer, handle_panic, security_headers_middleware};

/// 全機能のルーターを統合し、共通ミドルウェアを適用する
pub fn build_router(app_state: AppState) -> Router {
    let config = app_state.config.clone();

    Router::new()
        .merge(pages_router_with_state(app_state.clone()))
        .merge(system_router_with_state(app_state.clone()))
        .merge(account_router_with_state(app_state.clone()))
        .merge(contact_router_with_state(app_state.clone()))
        .merge(pricing_router_with_state(app_state.clone()))
        .merge(assessment_router_with_state(app_state))
        .fallback(fallback_handler)
        // 最内側: パニック応答も以降のヘッダー付与レイヤーを通る
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(RequestBodyLimitLayer::new(config.server.body_limit))
        .layer(TimeoutLayer::new(config.server.request_timeout))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
}

/// 未定義ルート（API は JSON、それ以外は HTML）
async fn fallback_handler(uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        AppError::NotFound(format!("Route not found: {}", uri.path())).into_response()
    } else {
        not_found_page().await.into_response()
    }
}
