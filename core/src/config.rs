//! Client configuration.
//!
//! The backend host comes from a single environment value. In the browser
//! build it is baked in at compile time, see `portfolio_frontend::config`.

use std::time::Duration;

/// Name of the environment value holding the backend host.
pub const BACKEND_SERVICE_ENV: &str = "PORTFOLIO_BACKEND_SERVICE";

/// Backend host used when the environment value is unset or blank.
pub const DEFAULT_BACKEND_SERVICE: &str = "localhost:5000";

/// Timeout shared by every backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How long a finished upload keeps showing its result.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(2);

/// Account type tag attached to every new spreadsheet.
pub const ACCOUNT_TYPE: &str = "demat";

/// Spreadsheet type tag sent with uploads.
pub const SPREADSHEET_TYPE: &str = "sheets";

/// Connection settings for [`crate::api::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend host, optionally with a scheme (`localhost:5000`,
    /// `https://api.example.org`).
    pub backend_service: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(backend_service: impl Into<String>) -> Self {
        Self {
            backend_service: backend_service.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Build from an optional environment value, falling back to
    /// [`DEFAULT_BACKEND_SERVICE`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        let host = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BACKEND_SERVICE);
        Self::new(host)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL with scheme and without trailing slash.
    pub fn base_url(&self) -> String {
        let host = self.backend_service.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        }
    }

    /// Absolute URL for a backend endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url(), endpoint)
        } else {
            format!("{}/{}", self.base_url(), endpoint)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_SERVICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_value_fallback() {
        assert_eq!(
            ClientConfig::from_env_value(None).backend_service,
            DEFAULT_BACKEND_SERVICE
        );
        assert_eq!(
            ClientConfig::from_env_value(Some("  ")).backend_service,
            DEFAULT_BACKEND_SERVICE
        );
        assert_eq!(
            ClientConfig::from_env_value(Some("api.internal:8080")).base_url(),
            "http://api.internal:8080"
        );
    }

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::new("https://portfolio.example/");
        assert_eq!(config.base_url(), "https://portfolio.example");
        assert_eq!(
            config.url("/spreadsheets/"),
            "https://portfolio.example/spreadsheets/"
        );
        assert_eq!(config.url("data/add"), "https://portfolio.example/data/add");
    }
}
