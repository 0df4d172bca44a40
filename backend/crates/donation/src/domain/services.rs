//! Domain Services
//!
//! Totalling of fetched payment rows.

use crate::domain::entities::{DonationSummary, PaymentRecord, RecentDonation};
use crate::error::{DonationError, DonationResult};

/// Rows fetched (and totalled) per request
pub const RECENT_DONATION_LIMIT: usize = 10;

/// Donor name shown when the payment carries none
pub const ANONYMOUS_DONOR: &str = "익명";

/// Summarize rows in the order given.
///
/// Only the first [`RECENT_DONATION_LIMIT`] rows count. A missing amount
/// counts as 0, a missing name as [`ANONYMOUS_DONOR`].
pub fn summarize(records: &[PaymentRecord]) -> DonationResult<DonationSummary> {
    let page = &records[..records.len().min(RECENT_DONATION_LIMIT)];

    let mut total_amount: i64 = 0;
    let mut recent_donations = Vec::with_capacity(page.len());

    for record in page {
        let amount = record.amount.unwrap_or(0);
        total_amount = total_amount
            .checked_add(amount)
            .ok_or(DonationError::Overflow)?;

        recent_donations.push(RecentDonation {
            amount,
            donor_name: record
                .customer_name
                .clone()
                .unwrap_or_else(|| ANONYMOUS_DONOR.to_string()),
            created_at: record.created_at,
        });
    }

    Ok(DonationSummary {
        total_amount,
        total_count: i64::try_from(page.len()).map_err(|_| DonationError::Overflow)?,
        recent_donations,
    })
}
