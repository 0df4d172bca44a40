//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Audit entries, login sessions, session store / audit sink ports
//! - `application/` - Use cases and the audit logger
//! - `infra/` - GoTrue client and PostgreSQL audit sink
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Login and logout delegated to the hosted auth service
//! - Session refresh endpoint retired (410); the provider refreshes tokens itself
//! - Login/logout audit trail with requester IP and User-Agent
//!
//! ## Audit Model
//! - Entries go through a bounded in-process queue to a background writer
//! - At-most-once, no retry; a lost entry never changes an HTTP outcome
//! - Logout entries carry `email = "unknown"`: the caller is not resolved first

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuditLogger, AuditWorker, AuthConfig};
pub use error::{AuthError, AuthResult};
pub use infra::{GoTrueSessionStore, PgAuditSink};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::audit_entry::*;
    pub use crate::domain::entity::login_session::*;
    pub use crate::presentation::dto::*;
}
