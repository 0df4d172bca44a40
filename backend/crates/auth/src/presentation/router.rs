//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::AuditLogger;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionStore;
use crate::infra::gotrue::GoTrueSessionStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router backed by the hosted GoTrue service
pub fn auth_router(store: GoTrueSessionStore, audit: AuditLogger, config: AuthConfig) -> Router {
    auth_router_generic(store, audit, config)
}

/// Create an Auth router for any session store implementation
pub fn auth_router_generic<S>(store: S, audit: AuditLogger, config: AuthConfig) -> Router
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        store: Arc::new(store),
        audit,
        config: Arc::new(config),
    };

    Router::new()
        .route("/login", post(handlers::login::<S>))
        .route("/logout", post(handlers::logout::<S>))
        .route("/refresh", post(handlers::refresh))
        .with_state(state)
}
