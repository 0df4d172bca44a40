//! Repository Traits

use crate::domain::entities::PaymentRecord;
use crate::error::DonationResult;

/// Donation repository trait
#[trait_variant::make(DonationRepository: Send)]
pub trait LocalDonationRepository {
    /// Most recent completed payments tagged `campaign_tag`, newest first,
    /// at most `limit` rows.
    async fn recent_completed(
        &self,
        campaign_tag: &str,
        limit: i64,
    ) -> DonationResult<Vec<PaymentRecord>>;
}
