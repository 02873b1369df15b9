// ledgerflow-site/src/features/pricing/handlers.rs

use axum::{
    routing::{get, post},
    Router,
};
use tracing::debug;

use super::dto::PricingCatalogResponse;
use super::service::{estimate, PricingEstimate, PricingSelection};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::types::ApiResponse;

/// 料金表を取得
pub async fn get_catalog_handler() -> ApiResponse<PricingCatalogResponse> {
    ApiResponse::success("Pricing catalog retrieved", PricingCatalogResponse::current())
}

/// 月額見積もりを計算
pub async fn estimate_handler(
    ValidatedJson(selection): ValidatedJson<PricingSelection>,
) -> AppResult<ApiResponse<PricingEstimate>> {
    let result = estimate(&selection);

    debug!(
        base_tier = selection.base_tier.id(),
        business_size = selection.business_size.id(),
        add_on_count = selection.add_ons.len(),
        employee_count = selection.employee_count,
        total = result.total,
        "Pricing estimate calculated"
    );

    Ok(ApiResponse::success("Estimate calculated", result))
}

// --- Router ---

pub fn pricing_router_with_state(app_state: AppState) -> Router {
    Router::new()
        .route("/api/pricing/catalog", get(get_catalog_handler))
        .route("/api/pricing/estimate", post(estimate_handler))
        .with_state(app_state)
}
