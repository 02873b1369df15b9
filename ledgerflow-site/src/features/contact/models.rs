// ledgerflow-site/src/features/contact/models.rs

use serde::{Deserialize, Serialize};

pub const BUSINESS_TYPES: [&str; 7] = [
    "Sole Proprietorship",
    "Partnership",
    "LLC",
    "S-Corporation",
    "C-Corporation",
    "Non-Profit",
    "Other",
];

pub const SERVICE_INTERESTS: [&str; 7] = [
    "Basic Bookkeeping",
    "Tax Preparation",
    "Payroll Services",
    "Business Planning",
    "Financial Analysis",
    "Audit Support",
    "Consultation Only",
];

/// 相談予約の時間枠（正午の枠はなし）
pub const TIME_SLOTS: [&str; 7] = [
    "9:00 AM - 10:00 AM",
    "10:00 AM - 11:00 AM",
    "11:00 AM - 12:00 PM",
    "1:00 PM - 2:00 PM",
    "2:00 PM - 3:00 PM",
    "3:00 PM - 4:00 PM",
    "4:00 PM - 5:00 PM",
];

pub const DEFAULT_TIMEZONE: &str = "EST";

/// 連絡方法の希望
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
}

impl PreferredContact {
    pub fn label(&self) -> &'static str {
        match self {
            PreferredContact::Email => "Email",
            PreferredContact::Phone => "Phone",
        }
    }
}

/// 事業者の連絡先（ページ表示用）
pub struct BusinessContact {
    pub email: &'static str,
    pub phone: &'static str,
    pub address_lines: [&'static str; 2],
    pub hours: [&'static str; 2],
}

pub const BUSINESS_CONTACT: BusinessContact = BusinessContact {
    email: "info@ledgerflowbookkeeping.com",
    phone: "(555) 123-4567",
    address_lines: ["123 Business District", "Your City, State 12345"],
    hours: ["Mon-Fri: 9:00 AM - 5:00 PM", "Sat: By Appointment"],
};
