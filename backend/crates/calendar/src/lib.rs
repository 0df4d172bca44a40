//! Calendar value types
//!
//! Event entries, month-view day cells and the category/search filter used
//! by the calendar pages. Plain data; storage and rendering live elsewhere.

pub mod category;
pub mod date;
pub mod event;
pub mod filters;

pub use category::EventCategory;
pub use date::{CalendarDate, month_grid};
pub use event::Event;
pub use filters::CalendarFilters;
