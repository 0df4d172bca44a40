//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::DonationAppState;
pub use router::{donation_router, donation_router_generic};
