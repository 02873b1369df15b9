// ledgerflow-site/src/features/system/mod.rs

pub mod dto;
pub mod handlers;
