//! Hosted backend provider
//!
//! Connection settings and a thin `reqwest` wrapper for the managed
//! backend-as-a-service. Every request carries the project's anon key in
//! the `apikey` header; callers add their own `Authorization` when acting
//! on behalf of a user.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

/// Provider connection settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public anon key
    pub anon_key: String,
    /// Per-request timeout for calls to the provider
    pub request_timeout: Duration,
}

impl ProviderConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            request_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(self, request_timeout: Duration) -> Self {
        Self {
            request_timeout,
            ..self
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider URL must not be empty")]
    MissingUrl,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP client bound to one provider project
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl ProviderClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let base_url = config.url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ProviderError::MissingUrl);
        }

        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url,
            anon_key: config.anon_key.clone(),
        })
    }

    /// Absolute URL for a provider path such as `/auth/v1/logout`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST request with the project key attached
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(self.endpoint(path))
            .header("apikey", &self.anon_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ProviderConfig::new("https://example.supabase.co/", "anon");
        let client = ProviderClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint("/auth/v1/logout"),
            "https://example.supabase.co/auth/v1/logout"
        );
        assert_eq!(
            client.endpoint("auth/v1/token?grant_type=password"),
            "https://example.supabase.co/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = ProviderConfig::new("  ", "anon");
        assert!(matches!(
            ProviderClient::new(&config),
            Err(ProviderError::MissingUrl)
        ));
    }

    #[test]
    fn test_with_timeout() {
        let config = ProviderConfig::new("https://example.supabase.co", "anon")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }
}
