// ledgerflow-site/src/features/assessment/mod.rs

pub mod dto;
pub mod handlers;
pub mod models;
pub mod service;
pub mod session;
