//! Shared Kernel
//!
//! Error vocabulary shared by every domain crate:
//! - [`error::app_error::AppError`] and the `AppResult<T>` alias
//! - [`error::kind::ErrorKind`] mapping to HTTP status codes
//! - the JSON failure envelope every route answers with
//!
//! Anything domain-specific belongs to the domain crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
