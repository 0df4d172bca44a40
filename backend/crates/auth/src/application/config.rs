//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Cookie holding the provider access token
    pub access_cookie_name: String,
    /// Cookie holding the provider refresh token
    pub refresh_cookie_name: String,
    /// Refresh cookie lifetime (the provider decides actual validity)
    pub refresh_cookie_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Pending audit entries held before new ones are dropped
    pub audit_queue_capacity: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_cookie_name: "sb-access-token".to_string(),
            refresh_cookie_name: "sb-refresh-token".to_string(),
            refresh_cookie_ttl: Duration::from_secs(30 * 24 * 3600), // 30 days
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            audit_queue_capacity: 1024,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::default()
        }
    }

    pub fn access_cookie(&self) -> CookieConfig {
        CookieConfig::new(
            self.access_cookie_name.as_str(),
            self.cookie_secure,
            self.cookie_same_site,
        )
    }

    pub fn refresh_cookie(&self) -> CookieConfig {
        CookieConfig::new(
            self.refresh_cookie_name.as_str(),
            self.cookie_secure,
            self.cookie_same_site,
        )
    }

    pub fn refresh_cookie_ttl_secs(&self) -> i64 {
        i64::try_from(self.refresh_cookie_ttl.as_secs()).unwrap_or(i64::MAX)
    }
}
