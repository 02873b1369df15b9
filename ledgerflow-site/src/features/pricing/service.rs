// ledgerflow-site/src/features/pricing/service.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

use super::models::{AddOn, BaseTier, BusinessSize};
use crate::utils::validation::common;

/// 料金計算の入力
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PricingSelection {
    #[serde(default)]
    pub base_tier: BaseTier,

    #[serde(default)]
    pub add_ons: BTreeSet<AddOn>,

    #[serde(default)]
    pub business_size: BusinessSize,

    #[serde(default = "default_employee_count")]
    #[validate(range(
        min = common::pricing::MIN_EMPLOYEES,
        max = common::pricing::MAX_EMPLOYEES,
        message = "Employee count must be between 1 and 10000"
    ))]
    pub employee_count: u32,
}

fn default_employee_count() -> u32 {
    common::pricing::MIN_EMPLOYEES
}

impl Default for PricingSelection {
    fn default() -> Self {
        Self {
            base_tier: BaseTier::default(),
            add_ons: BTreeSet::new(),
            business_size: BusinessSize::default(),
            employee_count: default_employee_count(),
        }
    }
}

/// 見積もりの明細行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub unit_price: u32,
    pub quantity: u32,
    pub amount: f64,
}

/// 月額見積もり
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingEstimate {
    pub base: LineItem,
    pub business_size: BusinessSize,
    pub size_multiplier: f64,
    pub add_ons: Vec<LineItem>,
    pub total: u64,
}

/// 見積もりを計算する
///
/// 合計 = 基本料金 × 規模係数 + 追加サービス料金の和（給与計算のみ従業員数倍）。
/// 最後にドル単位で四捨五入する。
pub fn estimate(selection: &PricingSelection) -> PricingEstimate {
    let multiplier = selection.business_size.multiplier();
    let employees = selection.employee_count.max(common::pricing::MIN_EMPLOYEES);

    let base = LineItem {
        id: selection.base_tier.id().to_string(),
        name: selection.base_tier.name().to_string(),
        unit_price: selection.base_tier.price(),
        quantity: 1,
        amount: f64::from(selection.base_tier.price()) * multiplier,
    };

    let add_ons: Vec<LineItem> = selection
        .add_ons
        .iter()
        .map(|add_on| {
            let quantity = if add_on.is_per_employee() {
                employees
            } else {
                1
            };
            LineItem {
                id: add_on.id().to_string(),
                name: add_on.name().to_string(),
                unit_price: add_on.price(),
                quantity,
                amount: f64::from(add_on.price()) * f64::from(quantity),
            }
        })
        .collect();

    let raw_total = base.amount + add_ons.iter().map(|item| item.amount).sum::<f64>();

    PricingEstimate {
        base,
        business_size: selection.business_size,
        size_multiplier: multiplier,
        add_ons,
        total: raw_total.round() as u64,
    }
}
