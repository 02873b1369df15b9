// ledgerflow-site/src/features/pricing/mod.rs

pub mod dto;
pub mod handlers;
pub mod models;
pub mod service;
