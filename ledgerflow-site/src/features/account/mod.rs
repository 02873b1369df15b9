// ledgerflow-site/src/features/account/mod.rs

pub mod dto;
pub mod handlers;
pub mod service;
pub mod templates;
