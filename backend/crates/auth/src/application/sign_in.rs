//! Sign In Use Case
//!
//! Delegates the password check to the hosted auth service and audits the
//! attempt, whatever its outcome.

use std::sync::Arc;

use platform::client::RequestMeta;

use crate::application::audit_logger::AuditLogger;
use crate::domain::entity::audit_entry::AuthAuditEntry;
use crate::domain::entity::login_session::LoginSession;
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    audit: AuditLogger,
}

impl<S> SignInUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, audit: AuditLogger) -> Self {
        Self {
            session_store,
            audit,
        }
    }

    pub async fn execute(
        &self,
        input: SignInInput,
        meta: &RequestMeta,
    ) -> AuthResult<LoginSession> {
        let email = input.email.trim();
        if email.is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let result = self
            .session_store
            .sign_in_with_password(email, &input.password)
            .await;

        let entry = match &result {
            Ok(session) => {
                tracing::info!(user_id = %session.user.id, "User signed in");
                AuthAuditEntry::login(email, meta, true)
            }
            Err(AuthError::InvalidCredentials) => AuthAuditEntry::login(email, meta, false)
                .with_detail("reason", "invalid_credentials"),
            Err(_) => {
                AuthAuditEntry::login(email, meta, false).with_detail("reason", "provider_error")
            }
        };
        self.audit.record(entry);

        result
    }
}
