// tests/integration/mod.rs

pub mod account;
pub mod assessment;
pub mod contact;
pub mod middleware;
pub mod pages;
pub mod pricing;
