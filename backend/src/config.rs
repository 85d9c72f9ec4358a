//! Environment configuration for outbound API calls.

use std::time::Duration;

const DEFAULT_EXPERIENCE_API_URL: &str = "http://127.0.0.1:8787/exec";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ExperienceApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
    }

    /// `EXPERIENCE_API_URL` and `EXPERIENCE_API_TIMEOUT_SECS`, with defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("EXPERIENCE_API_URL").unwrap_or(DEFAULT_EXPERIENCE_API_URL.to_string());
        let timeout_secs = std::env::var("EXPERIENCE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self { base_url, timeout: Duration::from_secs(timeout_secs) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_timeout() {
        let config = ExperienceApiConfig::new("http://example.invalid/exec");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.base_url, "http://example.invalid/exec");
    }
}
