// ledgerflow-site/src/features/pricing/dto.rs

use serde::{Deserialize, Serialize};

use super::models::{AddOn, BaseTier, BusinessSize};

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseTierDto {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub description: String,
}

impl From<BaseTier> for BaseTierDto {
    fn from(tier: BaseTier) -> Self {
        Self {
            id: tier.id().to_string(),
            name: tier.name().to_string(),
            price: tier.price(),
            description: tier.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnDto {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub unit: String,
    pub per_employee: bool,
}

impl From<AddOn> for AddOnDto {
    fn from(add_on: AddOn) -> Self {
        Self {
            id: add_on.id().to_string(),
            name: add_on.name().to_string(),
            price: add_on.price(),
            unit: add_on.unit().to_string(),
            per_employee: add_on.is_per_employee(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSizeDto {
    pub id: String,
    pub name: String,
    pub multiplier: f64,
}

impl From<BusinessSize> for BusinessSizeDto {
    fn from(size: BusinessSize) -> Self {
        Self {
            id: size.id().to_string(),
            name: size.name().to_string(),
            multiplier: size.multiplier(),
        }
    }
}

/// 料金表レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCatalogResponse {
    pub base_tiers: Vec<BaseTierDto>,
    pub add_ons: Vec<AddOnDto>,
    pub business_sizes: Vec<BusinessSizeDto>,
}

impl PricingCatalogResponse {
    pub fn current() -> Self {
        Self {
            base_tiers: BaseTier::all().into_iter().map(Into::into).collect(),
            add_ons: AddOn::all().into_iter().map(Into::into).collect(),
            business_sizes: BusinessSize::all().into_iter().map(Into::into).collect(),
        }
    }
}
