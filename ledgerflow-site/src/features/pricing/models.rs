// ledgerflow-site/src/features/pricing/models.rs

//! 料金表（静的テーブル）

use serde::{Deserialize, Serialize};

/// 基本パッケージ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseTier {
    Basic,
    Standard,
    Premium,
}

impl BaseTier {
    pub fn all() -> [Self; 3] {
        [Self::Basic, Self::Standard, Self::Premium]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Bookkeeping",
            Self::Standard => "Standard Package",
            Self::Premium => "Premium Package",
        }
    }

    /// 月額（ドル）
    pub fn price(&self) -> u32 {
        match self {
            Self::Basic => 299,
            Self::Standard => 499,
            Self::Premium => 799,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Basic => "Monthly transaction entry and reconciliation",
            Self::Standard => "Bookkeeping + monthly financial statements",
            Self::Premium => "Full service bookkeeping + quarterly tax prep",
        }
    }
}

impl Default for BaseTier {
    fn default() -> Self {
        Self::Standard
    }
}

/// 追加サービス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddOn {
    Payroll,
    TaxMonthly,
    TaxQuarterly,
    Planning,
    Audit,
}

impl AddOn {
    pub fn all() -> [Self; 5] {
        [
            Self::Payroll,
            Self::TaxMonthly,
            Self::TaxQuarterly,
            Self::Planning,
            Self::Audit,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Payroll => "payroll",
            Self::TaxMonthly => "tax-monthly",
            Self::TaxQuarterly => "tax-quarterly",
            Self::Planning => "planning",
            Self::Audit => "audit",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Payroll => "Payroll Processing",
            Self::TaxMonthly => "Monthly Tax Filing",
            Self::TaxQuarterly => "Quarterly Tax Prep",
            Self::Planning => "Business Planning",
            Self::Audit => "Audit Support",
        }
    }

    /// 単価（ドル）
    pub fn price(&self) -> u32 {
        match self {
            Self::Payroll => 45,
            Self::TaxMonthly => 150,
            Self::TaxQuarterly => 300,
            Self::Planning => 500,
            Self::Audit => 150,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Payroll => "per employee/month",
            Self::TaxMonthly => "per month",
            Self::TaxQuarterly => "per quarter",
            Self::Planning => "per month",
            Self::Audit => "per hour",
        }
    }

    /// 従業員数に比例する追加サービスか
    pub fn is_per_employee(&self) -> bool {
        matches!(self, Self::Payroll)
    }
}

/// 事業規模（月間取引量）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessSize {
    Startup,
    Small,
    Medium,
    Large,
}

impl BusinessSize {
    pub fn all() -> [Self; 4] {
        [Self::Startup, Self::Small, Self::Medium, Self::Large]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Startup => "Startup (0-10 transactions/month)",
            Self::Small => "Small Business (11-100 transactions/month)",
            Self::Medium => "Medium Business (101-500 transactions/month)",
            Self::Large => "Large Business (500+ transactions/month)",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Startup => 0.7,
            Self::Small => 1.0,
            Self::Medium => 1.5,
            Self::Large => 2.0,
        }
    }
}

impl Default for BusinessSize {
    fn default() -> Self {
        Self::Small
    }
}
