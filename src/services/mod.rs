pub mod api;
pub mod auth_api;
pub mod cache;
pub mod clipboard;
pub mod collector_api;
