//! Browser dashboard for campus electricity balance and usage statistics.
//!
//! The crate is split the usual way for a Yew front-end: `models` holds the
//! wire records, the settings store and the error taxonomy, `services` the
//! HTTP client, response cache and clipboard access, `hooks` the data-fetching
//! glue, and `components` the presentation.

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
