//! Presentational components
//!
//! Server-rendered HTML fragments (spinner, logo) and the alert slot backing
//! the alert dialog. Styling is left to the stylesheet; components only emit
//! class names.

pub mod alert;
mod escape;
pub mod logo;
pub mod spinner;

pub use alert::{AlertDescription, AlertSlot, AlertVariant};
pub use logo::{Logo, LogoVariant};
pub use spinner::{LoadingSpinner, SpinnerSize};
