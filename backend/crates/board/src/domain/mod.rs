//! Domain Layer

pub mod repository;

pub use repository::PostViewRepository;
