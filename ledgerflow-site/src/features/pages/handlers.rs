// ledgerflow-site/src/features/pages/handlers.rs

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use serde::Deserialize;

use super::assets::{site_css, site_js};
use super::layout::{render_page, NavItem};
use super::sections;
use crate::api::AppState;

/// トップページ
pub async fn landing_page() -> Html<String> {
    let body = [
        sections::hero(),
        sections::service_cards(),
        sections::assessment_widget(),
    ]
    .concat();

    Html(render_page("Bookkeeping for Small Businesses", NavItem::Home, &body))
}

/// サービス詳細と料金計算
pub async fn services_page() -> Html<String> {
    let body = [sections::service_details(), sections::pricing_calculator()].concat();

    Html(render_page("Services", NavItem::Services, &body))
}

/// お問い合わせ・相談予約
pub async fn contact_page() -> Html<String> {
    let body = [sections::contact_section(), sections::assessment_widget()].concat();

    Html(render_page("Contact", NavItem::Contact, &body))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelPageQuery {
    pub user_id: Option<String>,
}

/// アカウント解約フォーム
pub async fn cancel_account_page(Query(query): Query<CancelPageQuery>) -> Html<String> {
    let body = sections::cancellation_form(query.user_id.as_deref());

    Html(render_page("Cancel Account", NavItem::Account, &body))
}

/// 未定義パスのHTMLページ
pub async fn not_found_page() -> impl IntoResponse {
    let body = r#"<section class="section">
  <div class="container narrow">
    <h1 class="page-title">Page Not Found</h1>
    <p class="section-lead">The page you are looking for does not exist.</p>
    <p class="note"><a href="/" class="button button-primary">Return to Homepage</a></p>
  </div>
</section>"#;

    (
        StatusCode::NOT_FOUND,
        Html(render_page("Page Not Found", NavItem::Home, body)),
    )
}

// --- Router ---

pub fn pages_router_with_state(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/services", get(services_page))
        .route("/contact", get(contact_page))
        .route("/account/cancel", get(cancel_account_page))
        .route("/assets/site.js", get(site_js))
        .route("/assets/site.css", get(site_css))
        .with_state(app_state)
}
