//! Domain Entities

use chrono::{DateTime, Utc};

/// A completed payment row as stored
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PaymentRecord {
    pub amount: Option<i64>,
    pub customer_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentDonation {
    pub amount: i64,
    pub donor_name: String,
    pub created_at: DateTime<Utc>,
}

/// Derived per request; never persisted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DonationSummary {
    pub total_amount: i64,
    pub total_count: i64,
    pub recent_donations: Vec<RecentDonation>,
}

impl DonationSummary {
    pub fn empty() -> Self {
        Self::default()
    }
}
