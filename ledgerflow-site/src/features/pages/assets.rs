// ledgerflow-site/src/features/pages/assets.rs

use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
};

pub const SITE_JS: &str = include_str!("../../../static/site.js");
pub const SITE_CSS: &str = include_str!("../../../static/site.css");

const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";

pub async fn site_js() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        SITE_JS,
    )
}

pub async fn site_css() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/css; charset=utf-8"),
            (CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        SITE_CSS,
    )
}
