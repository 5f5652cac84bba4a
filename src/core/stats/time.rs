use chrono::{Month, Weekday};

use super::mode;
use crate::models::TripTable;
use crate::utils::date::{month_from_number, weekday_from_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub popular_month: Month,
    pub popular_weekday: Weekday,
    pub popular_hour: u32,
}

/// Most frequent month, weekday and start hour; `None` for an empty table.
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let trips = &table.trips;

    let month = mode(trips.iter().map(|t| t.month))?;
    let weekday = mode(trips.iter().map(|t| t.weekday))?;
    let hour = mode(trips.iter().map(|t| t.hour))?;

    Some(TimeStats {
        popular_month: month_from_number(month)?,
        popular_weekday: weekday_from_index(weekday)?,
        popular_hour: hour,
    })
}
