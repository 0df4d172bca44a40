//! Donation Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::DonationConfig;
use crate::domain::repository::DonationRepository;
use crate::infra::postgres::PgDonationRepository;
use crate::presentation::handlers::{self, DonationAppState};

/// Create the Donation router with PostgreSQL repository
pub fn donation_router(repo: PgDonationRepository, config: DonationConfig) -> Router {
    donation_router_generic(repo, config)
}

/// Create a Donation router for any repository implementation
pub fn donation_router_generic<R>(repo: R, config: DonationConfig) -> Router
where
    R: DonationRepository + Clone + Send + Sync + 'static,
{
    let state = DonationAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/stats", get(handlers::stats::<R>))
        .with_state(state)
}
