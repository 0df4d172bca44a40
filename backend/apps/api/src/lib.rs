//! API Server
//!
//! Configuration and router assembly for the binary in `main.rs`.

pub mod config;
pub mod router;

pub use config::AppConfig;
pub use router::{build_router, cors_layer};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
