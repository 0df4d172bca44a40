//! Application Layer
//!
//! Use cases and application services.

pub mod audit_logger;
pub mod config;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use audit_logger::{AuditLogger, AuditWorker};
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
