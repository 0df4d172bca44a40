//! Month view day cells

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// One day cell of the month view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDate {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub events: Vec<Event>,
}

/// Day cells for `year`/`month`, padded with neighbouring days to whole
/// Sunday-first weeks. Each cell carries the events occurring on it.
///
/// Returns `None` for an invalid month, or when the padded weeks would
/// leave the representable date range.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    events: &[Event],
) -> Option<Vec<CalendarDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.iter_days().take_while(|d| d.month() == month).last()?;

    let lead = i64::from(first.weekday().num_days_from_sunday());
    let trail = 6 - i64::from(last.weekday().num_days_from_sunday());
    let start = first.checked_sub_signed(TimeDelta::days(lead))?;
    let end = last.checked_add_signed(TimeDelta::days(trail))?;

    let cells = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| CalendarDate {
            date,
            is_current_month: date.month() == month && date.year() == year,
            is_today: date == today,
            events: events
                .iter()
                .filter(|e| e.occurs_on(date))
                .cloned()
                .collect(),
        })
        .collect();

    Some(cells)
}
