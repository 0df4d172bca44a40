//! API DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{DonationSummary, RecentDonation};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentDonationDto {
    pub amount: i64,
    pub donor_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<RecentDonation> for RecentDonationDto {
    fn from(d: RecentDonation) -> Self {
        Self {
            amount: d.amount,
            donor_name: d.donor_name,
            created_at: d.created_at,
        }
    }
}

/// `GET /api/donations/stats` response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStatsResponse {
    pub success: bool,
    pub total_amount: i64,
    pub total_count: i64,
    pub recent_donations: Vec<RecentDonationDto>,
}

impl From<DonationSummary> for DonationStatsResponse {
    fn from(summary: DonationSummary) -> Self {
        Self {
            success: true,
            total_amount: summary.total_amount,
            total_count: summary.total_count,
            recent_donations: summary
                .recent_donations
                .into_iter()
                .map(RecentDonationDto::from)
                .collect(),
        }
    }
}
