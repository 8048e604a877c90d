pub mod api;
pub mod config;
pub mod scan_provider;
