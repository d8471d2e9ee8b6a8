/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend API origin used by debug builds
    pub const DEV_BASE_URL: &'static str = "http://localhost:8000";

    /// Backend API origin used by release builds
    pub const PROD_BASE_URL: &'static str = "https://elec-watch.example.com";

    /// Per-request timeout in milliseconds
    pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

    /// Enable automatic refresh polling of the latest balance snapshot
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (10 minutes = 600,000ms)
    pub const POLLING_INTERVAL_MS: u32 = 600_000;

    /// Environment-selected backend origin.
    pub fn base_url() -> &'static str {
        if cfg!(debug_assertions) {
            Self::DEV_BASE_URL
        } else {
            Self::PROD_BASE_URL
        }
    }
}
