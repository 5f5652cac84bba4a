use crate::models::TripTable;
use crate::utils::DurationBreakdown;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub breakdown: DurationBreakdown,
    /// `None` when there are no trips.
    pub mean_secs: Option<f64>,
}

/// Total and mean trip duration. An empty table yields an all-zero total.
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let total: f64 = table.trips.iter().map(|t| t.duration_secs).sum();
    let mean = (!table.is_empty()).then(|| total / table.len() as f64);

    DurationStats {
        total_secs: total,
        breakdown: DurationBreakdown::from_seconds(total),
        mean_secs: mean,
    }
}
