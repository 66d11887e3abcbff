//! Total and mean trip duration.

use serde::Serialize;

use crate::table::TripTable;

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    /// Rows with a usable duration.
    pub trips: usize,
}

impl DurationStats {
    pub fn total_days(&self) -> f64 {
        self.total_seconds / SECONDS_PER_DAY
    }

    pub fn mean_minutes(&self) -> f64 {
        self.mean_seconds / SECONDS_PER_MINUTE
    }
}

/// Null durations are skipped. `None` when no row has a duration, so the
/// mean of an empty selection is never reported as zero.
pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    let (total_seconds, trips) = table
        .iter()
        .filter_map(|r| r.trip_duration)
        .fold((0.0, 0usize), |(sum, n), d| (sum + d, n + 1));

    if trips == 0 {
        return None;
    }

    Some(DurationStats {
        total_seconds,
        mean_seconds: total_seconds / trips as f64,
        trips,
    })
}
