//! Sign Out Use Case
//!
//! Revokes the caller's session at the hosted auth service and records a
//! logout audit entry. Never fails.

use std::sync::Arc;

use platform::client::RequestMeta;

use crate::application::audit_logger::AuditLogger;
use crate::domain::entity::audit_entry::AuthAuditEntry;
use crate::domain::repository::SessionStore;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    audit: AuditLogger,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, audit: AuditLogger) -> Self {
        Self {
            session_store,
            audit,
        }
    }

    /// Sign out the session behind `access_token`, if any.
    ///
    /// A store failure is logged and otherwise ignored. The audit entry is
    /// submitted either way.
    pub async fn execute(&self, access_token: Option<&str>, meta: &RequestMeta) {
        match access_token {
            Some(token) => {
                if let Err(e) = self.session_store.sign_out(token).await {
                    tracing::warn!(error = %e, "Session store sign-out failed, continuing");
                } else {
                    tracing::info!(ip = %meta.ip_address, "User signed out");
                }
            }
            None => {
                tracing::debug!(ip = %meta.ip_address, "Sign-out without session token");
            }
        }

        self.audit.record(AuthAuditEntry::logout(meta));
    }
}
