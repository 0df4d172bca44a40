//! Calendar event

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::category::EventCategory;

/// A calendar entry as exchanged with the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub category: EventCategory,
    #[serde(default)]
    pub is_all_day: bool,
    /// Profile id of the author
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Whether any part of the event falls on `date` (UTC calendar day).
    ///
    /// An end before the start is treated as a single-day event.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        let first = self.start_date.date_naive();
        let last = self.end_date.date_naive().max(first);
        first <= date && date <= last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(start: (u32, u32), end: (u32, u32)) -> Event {
        let at = |(day, hour): (u32, u32)| Utc.with_ymd_and_hms(2024, 4, day, hour, 0, 0).unwrap();
        Event {
            id: "e1".into(),
            title: "수요 기도회".into(),
            description: None,
            start_date: at(start),
            end_date: at(end),
            location: None,
            category: EventCategory::Worship,
            is_all_day: false,
            created_by: "u1".into(),
            created_at: at(start),
            updated_at: at(start),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn test_single_day() {
        let e = event((10, 19), (10, 21));
        assert!(e.occurs_on(day(10)));
        assert!(!e.occurs_on(day(9)));
        assert!(!e.occurs_on(day(11)));
    }

    #[test]
    fn test_multi_day_span() {
        let e = event((12, 9), (14, 18));
        assert!(e.occurs_on(day(12)));
        assert!(e.occurs_on(day(13)));
        assert!(e.occurs_on(day(14)));
        assert!(!e.occurs_on(day(15)));
    }

    #[test]
    fn test_inverted_range() {
        let e = event((20, 9), (18, 9));
        assert!(e.occurs_on(day(20)));
        assert!(!e.occurs_on(day(19)));
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = serde_json::to_value(event((1, 9), (1, 10))).unwrap();
        assert!(json.get("startDate").is_some());
        assert!(json.get("isAllDay").is_some());
        assert!(json.get("createdBy").is_some());
        assert!(json.get("description").is_none());
        assert_eq!(json["category"], "worship");
    }
}
