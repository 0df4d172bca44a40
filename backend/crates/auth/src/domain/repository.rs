//! Ports
//!
//! Interfaces to the hosted session store and the audit sink.
//! Implementations live in the infrastructure layer.

use crate::domain::entity::audit_entry::AuthAuditEntry;
use crate::domain::entity::login_session::LoginSession;
use crate::error::AuthResult;

/// Session store trait
///
/// The hosted auth service owns credential checks, token issuance and
/// refresh. This is the only surface the application touches.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Exchange email + password for a session
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<LoginSession>;

    /// Revoke the session behind `access_token`
    async fn sign_out(&self, access_token: &str) -> AuthResult<()>;
}

/// Audit sink trait
#[trait_variant::make(AuditSink: Send)]
pub trait LocalAuditSink {
    /// Persist one entry
    async fn write(&self, entry: &AuthAuditEntry) -> AuthResult<()>;
}
