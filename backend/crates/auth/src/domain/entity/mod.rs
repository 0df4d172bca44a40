pub mod audit_entry;
pub mod login_session;
