//! Board Backend Module
//!
//! Discussion board endpoints backed by the hosted Postgres database.
//!
//! - `domain/` - repository trait
//! - `application/` - use cases
//! - `infra/` - PostgreSQL implementation (RPC calls)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! View counts are bumped by the `increment_view_count` database function.
//! Its atomicity is the database's concern; every request increments again,
//! so counts are at-least-once, not exactly-once.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{BoardError, BoardResult};
pub use infra::postgres::PgBoardRepository;
pub use presentation::router::{board_router, board_router_generic};

#[cfg(test)]
mod tests;
