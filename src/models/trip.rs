use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::models::filter::{DayFilter, MonthFilter};
use crate::utils::date::weekday_index;

/// Route separator used when pairing start and end stations.
pub const ROUTE_SEPARATOR: &str = " to ";

/// Derived columns appended to every raw row.
pub const DERIVED_HEADERS: [&str; 3] = ["month", "weekday", "hour"];

/// One bicycle trip, as read from a city file.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime, // ⇔ "Start Time"
    pub duration_secs: f64,        // ⇔ "Trip Duration"
    pub start_station: String,     // ⇔ "Start Station"
    pub end_station: String,       // ⇔ "End Station"
    pub user_type: Option<String>, // ⇔ "User Type" (blank cells → None)
    pub gender: Option<String>,    // ⇔ "Gender" (not in every city)
    pub birth_year: Option<i32>,   // ⇔ "Birth Year" (not in every city)

    pub month: u32,   // 1..=12
    pub weekday: u32, // Sunday=0 .. Saturday=6
    pub hour: u32,    // 0..=23

    /// Source cells, untouched, for the raw row viewer.
    pub raw: Vec<String>,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        duration_secs: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
        raw: Vec<String>,
    ) -> Self {
        Self {
            start_time,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month: start_time.month(),
            weekday: weekday_index(start_time.weekday()),
            hour: start_time.hour(),
            raw,
        }
    }

    pub fn route(&self) -> String {
        format!(
            "{}{}{}",
            self.start_station, ROUTE_SEPARATOR, self.end_station
        )
    }

    pub fn matches(&self, month: MonthFilter, day: DayFilter) -> bool {
        month.matches(self.month) && day.matches(self.weekday)
    }

    /// Raw cells followed by the derived month / weekday / hour values.
    pub fn display_cells(&self) -> Vec<String> {
        let mut cells = self.raw.clone();
        cells.push(self.month.to_string());
        cells.push(self.weekday.to_string());
        cells.push(self.hour.to_string());
        cells
    }
}

/// The in-memory table for one filter cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub headers: Vec<String>,
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep only the trips matching both filters.
    pub fn retain_matching(&mut self, month: MonthFilter, day: DayFilter) {
        self.trips.retain(|t| t.matches(month, day));
    }

    /// Source headers followed by the derived column names.
    pub fn display_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .cloned()
            .chain(DERIVED_HEADERS.iter().map(|h| h.to_string()))
            .collect()
    }

    /// Rows in `[start, start + len)`, clamped to the table; empty past the end.
    pub fn slice(&self, start: usize, len: usize) -> &[Trip] {
        let from = start.min(self.trips.len());
        let to = start.saturating_add(len).min(self.trips.len());
        &self.trips[from..to]
    }
}
