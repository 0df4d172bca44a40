//! Application Layer

pub mod increment_view;

pub use increment_view::IncrementViewUseCase;
