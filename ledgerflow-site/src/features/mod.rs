// ledgerflow-site/src/features/mod.rs

pub mod account;
pub mod assessment;
pub mod contact;
pub mod pages;
pub mod pricing;
pub mod system;
