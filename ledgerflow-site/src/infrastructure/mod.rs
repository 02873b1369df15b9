// ledgerflow-site/src/infrastructure/mod.rs

pub mod email;
