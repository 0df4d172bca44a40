//! Domain Layer
//!
//! Audit entries, login sessions, and the ports to the outside world.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::audit_entry::{AuditAction, AuthAuditEntry, UNKNOWN_EMAIL};
pub use entity::login_session::{LoginSession, SessionUser};
pub use repository::{AuditSink, SessionStore};
