//! Client configuration.
//!
//! Values are fixed at build time. `TM_API_BASE_URL` and `TM_API_TIMEOUT_SECS`
//! override the defaults when set while compiling.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_SESSION_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin of the travel management API, without a trailing slash.
    pub api_base_url: String,
    /// Upper bound for a single request attempt.
    pub request_timeout: Duration,
    /// Extra attempts for GET requests that timed out or failed in transit.
    pub get_retries: u32,
    /// localStorage key holding the signed-in identity.
    pub session_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_overrides(option_env!("TM_API_BASE_URL"), option_env!("TM_API_TIMEOUT_SECS"))
    }
}

impl ClientConfig {
    /// Build a config from optional override strings, ignoring blank or unparsable values.
    pub fn from_overrides(base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let timeout = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_base_url,
            request_timeout: Duration::from_secs(timeout),
            get_retries: 1,
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_overrides(None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.get_retries, 1);
        assert_eq!(config.session_key, "user");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_overrides(Some("https://api.example.com/"), Some("30"));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(30));

        let config = ClientConfig::from_overrides(Some("  "), Some("soon"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let config = ClientConfig::from_overrides(None, Some("0"));
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
