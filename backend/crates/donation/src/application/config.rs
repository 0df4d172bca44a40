//! Application Configuration

/// Donation application configuration
#[derive(Debug, Clone)]
pub struct DonationConfig {
    /// `order_name` identifying payments to this campaign
    pub campaign_tag: String,
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            campaign_tag: "기도터 건축헌금".to_string(),
        }
    }
}

impl DonationConfig {
    pub fn new(campaign_tag: impl Into<String>) -> Self {
        Self {
            campaign_tag: campaign_tag.into(),
        }
    }
}
