//! Filtered-set metadata and the combined statistics report.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::calendar::{DayFilter, FilterSelector, MonthFilter};
use crate::city::City;
use crate::error::Result;
use crate::filter;
use crate::source;
use crate::stats::{
    DurationStats, StationStats, TravelTimeStats, UserStats, duration_stats, station_stats,
    travel_time_stats, user_stats,
};
use crate::table::{TripRecord, TripTable};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSummary {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
    /// Every loaded row, including ones whose start time did not parse.
    pub total_rides: usize,
    pub filtered_rides: usize,
    /// Distinct start stations in the filtered set.
    pub start_stations: usize,
    pub end_stations: usize,
}

impl FilterSummary {
    pub fn new(full: &TripTable, filtered: &TripTable, selector: &FilterSelector) -> Self {
        Self {
            city: full.city(),
            month: selector.month,
            day: selector.day,
            total_rides: full.len(),
            filtered_rides: filtered.len(),
            start_stations: distinct(filtered, |r| r.start_station.as_deref()),
            end_stations: distinct(filtered, |r| r.end_station.as_deref()),
        }
    }
}

fn distinct<'a>(table: &'a TripTable, field: impl Fn(&'a TripRecord) -> Option<&'a str>) -> usize {
    table.iter().filter_map(field).collect::<HashSet<_>>().len()
}

/// All four statistic groups for one filtered selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: FilterSummary,
    pub travel: Option<TravelTimeStats>,
    pub stations: Option<StationStats>,
    pub durations: Option<DurationStats>,
    pub users: UserStats,
}

impl Report {
    /// Computes the report for an already filtered table.
    pub fn build(full: &TripTable, filtered: &TripTable, selector: &FilterSelector) -> Self {
        Self {
            summary: FilterSummary::new(full, filtered, selector),
            travel: travel_time_stats(filtered),
            stations: station_stats(filtered),
            durations: duration_stats(filtered),
            users: user_stats(filtered),
        }
    }
}

/// Filters `table` by `selector` and computes every statistic group.
#[tracing::instrument(skip(table), fields(city = table.city().id()))]
pub fn analyze(table: &TripTable, selector: &FilterSelector) -> Report {
    let filtered = filter::apply(table, selector);
    let report = Report::build(table, &filtered, selector);
    info!(
        total_rides = report.summary.total_rides,
        filtered_rides = report.summary.filtered_rides,
        "Statistics computed"
    );
    report
}

/// Loads `city` from `data_dir` and analyzes it.
pub fn run(city: City, selector: &FilterSelector, data_dir: &Path) -> Result<Report> {
    let table = source::load(city, data_dir)?;
    Ok(analyze(&table, selector))
}
