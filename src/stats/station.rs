//! Station popularity.

use serde::Serialize;

use crate::stats::mode::first_mode;
use crate::table::TripTable;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Most frequent (start, end) combination among rows that have both.
    pub trip: Option<StationPair>,
}

/// `None` for an empty table.
pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    if table.is_empty() {
        return None;
    }

    let start_station = first_mode(table.iter().filter_map(|r| r.start_station.as_deref()));
    let end_station = first_mode(table.iter().filter_map(|r| r.end_station.as_deref()));
    let trip = first_mode(table.iter().filter_map(|r| {
        Some((r.start_station.as_deref()?, r.end_station.as_deref()?))
    }))
    .map(|(start, end)| StationPair {
        start: start.to_string(),
        end: end.to_string(),
    });

    Some(StationStats {
        start_station: start_station.map(str::to_string),
        end_station: end_station.map(str::to_string),
        trip,
    })
}
