// ledgerflow-site/src/utils/validation.rs

pub mod common;

pub use common::{is_valid_email, validate_not_empty_or_whitespace, validate_phone};
