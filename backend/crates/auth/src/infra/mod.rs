//! Infrastructure Layer
//!
//! Hosted auth service client and database-backed audit sink.

pub mod gotrue;
pub mod postgres;

pub use gotrue::GoTrueSessionStore;
pub use postgres::PgAuditSink;
