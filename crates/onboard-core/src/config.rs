//! Accounts API client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::{SignupError, SignupResult};

/// Base URL used when none is configured (local development backend).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Signup endpoint, relative to the base URL.
pub const SIGNUP_PATH: &str = "api/users/signup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    /// Per-request timeout. `None` leaves it to the transport defaults.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Parse a base URL such as `http://localhost:3000` or
    /// `https://accounts.example.com/v2`. A path prefix is kept.
    pub fn new(base_url: &str) -> SignupResult<Self> {
        let mut url =
            Url::parse(base_url).map_err(|e| SignupError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(SignupError::InvalidBaseUrl(format!(
                "{base_url}: expected an http(s) URL"
            )));
        }

        // Url::join drops the last path segment unless it ends with '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the signup endpoint.
    pub fn signup_url(&self) -> SignupResult<Url> {
        self.base_url
            .join(SIGNUP_PATH)
            .map_err(|e| SignupError::InvalidBaseUrl(e.to_string()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // Constant URL, covered by test_default_signup_url
        Self::new(DEFAULT_API_BASE_URL).expect("default base URL is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_signup_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.signup_url().unwrap().as_str(),
            "http://localhost:3000/api/users/signup"
        );
        assert_eq!(config, ClientConfig::new(DEFAULT_API_BASE_URL).unwrap());
    }

    #[test]
    fn test_path_prefix_is_kept() {
        let config = ClientConfig::new("https://accounts.example.com/v2").unwrap();
        assert_eq!(
            config.signup_url().unwrap().as_str(),
            "https://accounts.example.com/v2/api/users/signup"
        );

        let config = ClientConfig::new("https://accounts.example.com/v2/").unwrap();
        assert_eq!(
            config.signup_url().unwrap().as_str(),
            "https://accounts.example.com/v2/api/users/signup"
        );
    }

    #[test]
    fn test_rejects_unusable_urls() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(SignupError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com"),
            Err(SignupError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ClientConfig::new("mailto:alice@example.com"),
            Err(SignupError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_timeout_defaults_to_none() {
        let config = ClientConfig::default();
        assert!(config.timeout.is_none());

        let config = config.with_timeout(Some(Duration::from_secs(10)));
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    }
}
