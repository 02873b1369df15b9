// ledgerflow-site/src/features/pages/mod.rs

pub mod assets;
pub mod handlers;
pub mod layout;
pub mod sections;
