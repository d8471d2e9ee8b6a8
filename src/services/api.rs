use crate::config::Config;
use crate::models::error::{classify, AppError, RawFailure};
use crate::models::records::{
    BalanceRecord, DeletedCount, InfoType, PeriodUnit, PeriodUsage, RecordCount, Statistics,
};
use crate::services::cache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

// API CONFIGURATION
/// Configuration for the backend API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn login_url(&self) -> String {
        self.endpoint("/auth/login")
    }

    pub fn logout_url(&self) -> String {
        self.endpoint("/auth/logout")
    }

    pub fn me_url(&self) -> String {
        self.endpoint("/auth/me")
    }

    pub fn latest_record_url(&self) -> String {
        self.endpoint("/info/latest_record")
    }

    pub fn statistics_url(&self) -> String {
        self.endpoint("/info/statistics")
    }

    pub fn record_count_url(&self) -> String {
        self.endpoint("/info/record_count")
    }

    pub fn credential_url(&self) -> String {
        self.endpoint("/collector/credential")
    }

    /// URL for recent records; fails before any network call when the day
    /// count is below one.
    pub fn recent_records_url(&self, days: u32, info_type: InfoType) -> Result<String, AppError> {
        if days < 1 {
            return Err(AppError::InvalidParameter(
                "You must at least get recent records starting from 1 day before".to_string(),
            ));
        }
        Ok(format!(
            "{}?days={days}&info_type={}",
            self.endpoint("/info/recent_records"),
            info_type.code()
        ))
    }

    /// URL for aggregated period usage; the period count must be at least one.
    pub fn period_usage_url(
        &self,
        unit: PeriodUnit,
        count: u32,
        recent_on_top: bool,
    ) -> Result<String, AppError> {
        if count < 1 {
            return Err(AppError::InvalidParameter(
                "At least one period is required".to_string(),
            ));
        }
        Ok(format!(
            "{}?period={}&period_count={count}&recent_on_top={recent_on_top}",
            self.endpoint("/info/period_usage"),
            unit.code()
        ))
    }

    /// URL for records inside a closed time range; the start must not exceed
    /// the end.
    pub fn records_by_range_url(
        &self,
        start: i64,
        end: i64,
        info_type: InfoType,
    ) -> Result<String, AppError> {
        validate_range(start, end)?;
        Ok(format!(
            "{}?start={start}&end={end}&info_type={}",
            self.endpoint("/info/records_by_range"),
            info_type.code()
        ))
    }

    /// URL for deleting records inside a closed time range.
    pub fn delete_records_url(&self, start: i64, end: i64) -> Result<String, AppError> {
        validate_range(start, end)?;
        Ok(format!(
            "{}?start={start}&end={end}",
            self.endpoint("/info/records")
        ))
    }
}

fn validate_range(start: i64, end: i64) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::InvalidParameter(
            "Time range start must not exceed its end".to_string(),
        ));
    }
    Ok(())
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::base_url().to_string()),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_millis(Config::REQUEST_TIMEOUT_MS)),
        }
    }
}

// BACKEND CLIENT
/// HTTP client for the dashboard backend. Each operation issues exactly one
/// request; every failure is routed through `classify`.
pub struct BackendClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl BackendClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Environment(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let request = self.http.get(url).timeout(self.config.timeout);
        Self::execute(request).await
    }

    pub(crate) async fn post_json<T, B>(&self, url: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.post(url).timeout(self.config.timeout).json(body);
        Self::execute(request).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let request = self.http.delete(url).timeout(self.config.timeout);
        Self::execute(request).await
    }

    /// Executes a single request. Success means a 2xx response with a body
    /// that decodes into `T`; any other outcome is classified.
    async fn execute<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, AppError> {
        let request = with_session(request);

        let response = request
            .send()
            .await
            .map_err(|e| classify(raw_failure(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            return Err(classify(RawFailure::Response {
                status: status.as_u16(),
                body,
            }));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| classify(RawFailure::Other(format!("Failed to parse response: {e}"))))
    }

    // INFO OPERATIONS
    /// Fetches the latest balance snapshot caught from the campus platform.
    pub async fn latest_record(&self) -> Result<BalanceRecord, AppError> {
        self.get_json(&self.config.latest_record_url()).await
    }

    /// Fetches aggregate usage statistics, totals trimmed to two decimals.
    pub async fn statistics(&self) -> Result<Statistics, AppError> {
        let stats: Statistics = self.get_json(&self.config.statistics_url()).await?;
        Ok(stats.rounded())
    }

    /// Fetches balance snapshots starting `days` days ago.
    pub async fn recent_records(
        &self,
        days: u32,
        info_type: InfoType,
    ) -> Result<Vec<BalanceRecord>, AppError> {
        let url = self.config.recent_records_url(days, info_type)?;
        self.get_json(&url).await
    }

    /// Fetches the last `count` aggregated usage periods.
    pub async fn period_usage(
        &self,
        unit: PeriodUnit,
        count: u32,
        recent_on_top: bool,
    ) -> Result<Vec<PeriodUsage>, AppError> {
        let url = self.config.period_usage_url(unit, count, recent_on_top)?;
        self.get_json(&url).await
    }

    /// Fetches balance snapshots inside a closed time range.
    pub async fn records_by_range(
        &self,
        start: i64,
        end: i64,
        info_type: InfoType,
    ) -> Result<Vec<BalanceRecord>, AppError> {
        let url = self.config.records_by_range_url(start, end, info_type)?;
        self.get_json(&url).await
    }

    /// Deletes records inside a closed time range, returning how many went.
    pub async fn delete_records(&self, start: i64, end: i64) -> Result<DeletedCount, AppError> {
        let url = self.config.delete_records_url(start, end)?;
        self.delete_json(&url).await
    }

    /// Fetches the stored-record counters.
    pub async fn record_count(&self) -> Result<RecordCount, AppError> {
        self.get_json(&self.config.record_count_url()).await
    }
}

/// Attaches the cookie-based session to a request.
fn with_session(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_credentials_include();
    request
}

/// Maps a reqwest failure onto the typed raw-failure sum.
fn raw_failure(error: &reqwest::Error) -> RawFailure {
    if error.is_timeout() {
        return RawFailure::Other(format!("Request timeout: {error}"));
    }
    // A send-stage failure without a status means the backend was never
    // reached.
    if error.is_request() && error.status().is_none() {
        return RawFailure::Unreachable;
    }
    RawFailure::Other(error.to_string())
}

// CONVENIENCE FUNCTIONS
/// Fetches the latest balance snapshot using default configuration.
pub async fn fetch_latest_record() -> Result<BalanceRecord, AppError> {
    BackendClient::new()?.latest_record().await
}

/// Fetches aggregate statistics using default configuration.
pub async fn fetch_statistics() -> Result<Statistics, AppError> {
    BackendClient::new()?.statistics().await
}

/// Fetches recent balance snapshots using default configuration.
pub async fn fetch_recent_records(
    days: u32,
    info_type: InfoType,
) -> Result<Vec<BalanceRecord>, AppError> {
    BackendClient::new()?.recent_records(days, info_type).await
}

/// Fetches aggregated period usage using default configuration.
pub async fn fetch_period_usage(
    unit: PeriodUnit,
    count: u32,
    recent_on_top: bool,
) -> Result<Vec<PeriodUsage>, AppError> {
    BackendClient::new()?
        .period_usage(unit, count, recent_on_top)
        .await
}

/// Fetches records inside a closed time range using default configuration.
pub async fn fetch_records_by_range(
    start: i64,
    end: i64,
    info_type: InfoType,
) -> Result<Vec<BalanceRecord>, AppError> {
    BackendClient::new()?
        .records_by_range(start, end, info_type)
        .await
}

/// Fetches the stored-record counters using default configuration.
pub async fn fetch_record_count() -> Result<RecordCount, AppError> {
    BackendClient::new()?.record_count().await
}

/// Deletes records inside a closed time range. The displayed counters must
/// reflect server truth after any attempted deletion, so the record-count
/// cache key is revalidated on success and on failure alike.
pub async fn delete_records(start: i64, end: i64) -> Result<DeletedCount, AppError> {
    let client = BackendClient::new()?;
    let result = client.delete_records(start, end).await;
    cache::invalidate(cache::keys::RECORD_COUNT);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::builder().base_url("http://backend.test").build()
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), Config::base_url());
        assert_eq!(
            config.timeout(),
            Duration::from_millis(Config::REQUEST_TIMEOUT_MS)
        );
    }

    #[test]
    fn test_fixed_endpoint_urls() {
        let config = config();
        assert_eq!(config.me_url(), "http://backend.test/auth/me");
        assert_eq!(
            config.latest_record_url(),
            "http://backend.test/info/latest_record"
        );
        assert_eq!(
            config.credential_url(),
            "http://backend.test/collector/credential"
        );
    }

    #[test]
    fn test_recent_records_url_embeds_parameters() {
        let url = config().recent_records_url(3, InfoType::Balance).unwrap();
        assert!(url.starts_with("http://backend.test/info/recent_records"));
        assert!(url.contains("days=3"));
        assert!(url.contains("info_type=balance"));
    }

    #[test]
    fn test_recent_records_rejects_zero_days() {
        let error = config().recent_records_url(0, InfoType::Usage).unwrap_err();
        assert_eq!(error.kind(), "invalid_parameter");
    }

    #[test]
    fn test_period_usage_rejects_zero_count() {
        let error = config()
            .period_usage_url(PeriodUnit::Week, 0, true)
            .unwrap_err();
        assert_eq!(error.kind(), "invalid_parameter");
    }

    #[test]
    fn test_period_usage_url_construction() {
        let url = config()
            .period_usage_url(PeriodUnit::Month, 14, true)
            .unwrap();
        assert!(url.contains("period=month"));
        assert!(url.contains("period_count=14"));
        assert!(url.contains("recent_on_top=true"));
    }

    #[test]
    fn test_range_urls_reject_inverted_ranges() {
        let error = config()
            .records_by_range_url(200, 100, InfoType::Usage)
            .unwrap_err();
        assert_eq!(error.kind(), "invalid_parameter");

        let error = config().delete_records_url(200, 100).unwrap_err();
        assert_eq!(error.kind(), "invalid_parameter");
    }

    #[test]
    fn test_range_urls_accept_point_ranges() {
        // start == end is a legal, single-instant range.
        assert!(config()
            .records_by_range_url(100, 100, InfoType::Balance)
            .is_ok());
        assert!(config().delete_records_url(100, 100).is_ok());
    }
}
