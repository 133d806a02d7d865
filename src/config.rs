//! Client configuration
//!
//! The only configuration axis is the API base URL plus request timeout.
//! Resolution order: `--api-url` flag, `COINFOLIO_API_URL` env var, default.

use std::time::Duration;

/// Default base URL of the portfolio tracker API
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

/// Environment variable overriding the base URL
pub const API_URL_ENV: &str = "COINFOLIO_API_URL";

/// Per-request timeout for all gateway calls
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Resolve the API configuration, preferring an explicit flag value over
    /// the environment over the built-in default
    pub fn resolve(flag_override: Option<&str>) -> Self {
        let base_url = flag_override
            .map(str::to_string)
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_override_wins() {
        let config = ApiConfig::resolve(Some("http://api.example.com/api"));
        assert_eq!(config.base_url, "http://api.example.com/api");
    }

    #[test]
    fn test_default_timeout() {
        let config = ApiConfig::resolve(Some(DEFAULT_API_BASE));
        assert_eq!(config.timeout, REQUEST_TIMEOUT);
    }
}
