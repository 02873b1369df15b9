// ledgerflow-site/src/middleware/mod.rs

pub mod security;

pub use security::{cors_layer, handle_panic, security_headers_middleware};
