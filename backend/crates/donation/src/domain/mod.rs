//! Domain Layer

pub mod entities;
pub mod repository;
pub mod services;

pub use entities::{DonationSummary, PaymentRecord, RecentDonation};
pub use repository::DonationRepository;
