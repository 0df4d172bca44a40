//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the domain crates:
//! - Requester metadata (client IP, User-Agent) from HTTP headers
//! - Cookie and bearer token extraction, cookie clearing
//! - Connection settings and HTTP client for the hosted backend provider

pub mod client;
pub mod cookie;
pub mod provider;
