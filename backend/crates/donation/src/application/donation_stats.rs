//! Donation Stats Use Case

use std::sync::Arc;

use crate::application::config::DonationConfig;
use crate::domain::entities::DonationSummary;
use crate::domain::repository::DonationRepository;
use crate::domain::services::{RECENT_DONATION_LIMIT, summarize};
use crate::error::DonationResult;

pub struct DonationStatsUseCase<R>
where
    R: DonationRepository,
{
    repo: Arc<R>,
    config: Arc<DonationConfig>,
}

impl<R> DonationStatsUseCase<R>
where
    R: DonationRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<DonationConfig>) -> Self {
        Self { repo, config }
    }

    /// Summary of the latest completed donations.
    ///
    /// A query failure yields an empty summary, not an error.
    pub async fn execute(&self) -> DonationResult<DonationSummary> {
        let limit = RECENT_DONATION_LIMIT as i64;

        let records = match self
            .repo
            .recent_completed(&self.config.campaign_tag, limit)
            .await
        {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    campaign = %self.config.campaign_tag,
                    "Donation query failed, answering with empty stats"
                );
                return Ok(DonationSummary::empty());
            }
        };

        summarize(&records)
    }
}
