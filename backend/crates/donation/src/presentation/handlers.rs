//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::{DonationConfig, DonationStatsUseCase};
use crate::domain::repository::DonationRepository;
use crate::error::DonationResult;
use crate::presentation::dto::DonationStatsResponse;

/// Shared state for donation handlers
#[derive(Clone)]
pub struct DonationAppState<R>
where
    R: DonationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<DonationConfig>,
}

/// GET /api/donations/stats
pub async fn stats<R>(
    State(state): State<DonationAppState<R>>,
) -> DonationResult<Json<DonationStatsResponse>>
where
    R: DonationRepository + Clone + Send + Sync + 'static,
{
    let summary = DonationStatsUseCase::new(state.repo.clone(), state.config.clone())
        .execute()
        .await?;

    Ok(Json(summary.into()))
}
