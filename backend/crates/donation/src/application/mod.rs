//! Application Layer

pub mod config;
pub mod donation_stats;

pub use config::DonationConfig;
pub use donation_stats::DonationStatsUseCase;
