use super::mode;
use crate::models::TripTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start: String,
    pub popular_end: String,
    /// "<start> to <end>"
    pub popular_route: String,
}

/// Blank station cells are skipped, and so is any route missing either end.
pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    let trips = &table.trips;

    let starts = trips
        .iter()
        .map(|t| t.start_station.as_str())
        .filter(|s| !s.is_empty());
    let ends = trips
        .iter()
        .map(|t| t.end_station.as_str())
        .filter(|s| !s.is_empty());
    let routes = trips
        .iter()
        .filter(|t| !t.start_station.is_empty() && !t.end_station.is_empty())
        .map(|t| t.route());

    Some(StationStats {
        popular_start: mode(starts)?.to_string(),
        popular_end: mode(ends)?.to_string(),
        popular_route: mode(routes)?,
    })
}
