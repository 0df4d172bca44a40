//! Auth Audit Entry
//!
//! Record of a security-relevant action together with who asked for it.
//! Entries are built by the caller and never mutated after submission.

use chrono::{DateTime, Utc};
use derive_more::Display;
use platform::client::RequestMeta;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Email recorded when the caller's identity was not resolved.
pub const UNKNOWN_EMAIL: &str = "unknown";

/// Audited action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    #[display("login")]
    Login,
    #[display("logout")]
    Logout,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Login => "login",
            AuditAction::Logout => "logout",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthAuditEntry {
    pub email: String,
    pub action: AuditAction,
    pub ip_address: String,
    pub user_agent: String,
    pub details: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl AuthAuditEntry {
    pub fn new(email: impl Into<String>, action: AuditAction, meta: &RequestMeta) -> Self {
        Self {
            email: email.into(),
            action,
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
            details: Map::new(),
            created_at: Utc::now(),
        }
    }

    /// Logout entry.
    ///
    /// The email is always [`UNKNOWN_EMAIL`]: logout does not resolve the
    /// caller before recording.
    pub fn logout(meta: &RequestMeta) -> Self {
        Self::new(UNKNOWN_EMAIL, AuditAction::Logout, meta).with_detail("reason", "user_logout")
    }

    /// Login attempt entry, successful or not
    pub fn login(email: &str, meta: &RequestMeta, success: bool) -> Self {
        Self::new(email, AuditAction::Login, meta).with_detail("success", success)
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }
}
