//! Board Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::domain::repository::PostViewRepository;
use crate::infra::postgres::PgBoardRepository;
use crate::presentation::handlers::{self, BoardAppState};

/// Create the Board router with PostgreSQL repository
pub fn board_router(repo: PgBoardRepository) -> Router {
    board_router_generic(repo)
}

/// Create a Board router for any repository implementation
pub fn board_router_generic<R>(repo: R) -> Router
where
    R: PostViewRepository + Clone + Send + Sync + 'static,
{
    let state = BoardAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/posts/{id}/view", post(handlers::increment_view::<R>))
        .with_state(state)
}
