// ledgerflow-site/src/features/contact/mod.rs

pub mod dto;
pub mod handlers;
pub mod models;
pub mod service;
pub mod templates;
