use serde::{Deserialize, Serialize};

use crate::category::EventCategory;
use crate::event::Event;

/// Category and text filter applied to the calendar view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFilters {
    /// Shown categories. Empty shows all.
    #[serde(default)]
    pub categories: Vec<EventCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl CalendarFilters {
    pub fn matches(&self, event: &Event) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&event.category) {
            return false;
        }

        let query = match self.search_query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };

        [
            Some(event.title.as_str()),
            event.description.as_deref(),
            event.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    }
}
