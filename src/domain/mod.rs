pub mod app_config;
pub mod catalog;
pub mod error;
