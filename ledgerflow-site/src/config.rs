// src/config.rs

pub mod app;

pub use app::AppConfig;
