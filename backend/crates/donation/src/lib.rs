//! Donation Backend Module
//!
//! Fundraising statistics for the donations page.
//!
//! - `domain/` - payment records, summary, totalling
//! - `application/` - stats use case and configuration
//! - `infra/` - PostgreSQL query over `payments`
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! ## Statistic semantics
//! The totals cover only the most recent completed payments fetched for
//! the campaign (at most [`domain::services::RECENT_DONATION_LIMIT`] rows).
//! They are a page statistic, not a campaign-wide aggregate.
//!
//! A failing query is answered as an empty, successful summary, so clients
//! cannot tell "no donations yet" from "query failed". Whether the stats
//! banner should ever show an error is pending a product decision.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::DonationConfig;
pub use error::{DonationError, DonationResult};
pub use infra::postgres::PgDonationRepository;
pub use presentation::router::{donation_router, donation_router_generic};

#[cfg(test)]
mod tests;
