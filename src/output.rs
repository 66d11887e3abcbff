//! Emitting reports: structured log lines, debug dumps and JSON.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::calendar::weekday_name;
use crate::report::Report;
use crate::stats::{CategoryCount, Stat};

/// Logs the report using Rust's debug pretty-print format.
pub fn print_pretty(report: &Report) {
    debug!("{:#?}", report);
}

/// Writes the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn join_counts(counts: &[CategoryCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{}={}", c.value, c.count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Logs one `info` event per statistic group.
pub fn log_report(report: &Report) {
    let s = &report.summary;
    info!(
        city = %s.city,
        month = %s.month,
        day = %s.day,
        total_rides = s.total_rides,
        filtered_rides = s.filtered_rides,
        start_stations = s.start_stations,
        end_stations = s.end_stations,
        "Filter summary"
    );

    match &report.travel {
        Some(t) => info!(
            month = t.month_name(),
            day = weekday_name(t.weekday),
            hour = t.hour,
            "Most frequent times of travel"
        ),
        None => info!("Most frequent times of travel: no data"),
    }

    match &report.stations {
        Some(st) => {
            let trip = st
                .trip
                .as_ref()
                .map_or_else(|| "-".to_string(), |p| format!("{} -> {}", p.start, p.end));
            info!(
                start_station = st.start_station.as_deref().unwrap_or("-"),
                end_station = st.end_station.as_deref().unwrap_or("-"),
                trip = %trip,
                "Most popular stations"
            );
        }
        None => info!("Most popular stations: no data"),
    }

    match &report.durations {
        Some(d) => info!(
            total_days = d.total_days(),
            mean_minutes = d.mean_minutes(),
            trips = d.trips,
            "Trip duration"
        ),
        None => info!("Trip duration: no data"),
    }

    let users = &report.users;
    match &users.user_types {
        Some(types) => info!(user_types = %join_counts(types), "User types"),
        None => info!("User types: no data"),
    }
    match &users.gender {
        Stat::Value(g) => info!(gender = %join_counts(g), "Gender"),
        Stat::NoData => info!("Gender: no data"),
        Stat::Unavailable => info!("Gender: no data available for this city"),
    }
    match &users.birth_year {
        Stat::Value(y) => info!(
            earliest = y.earliest,
            most_recent = y.most_recent,
            most_common = y.most_common,
            "Birth year"
        ),
        Stat::NoData => info!("Birth year: no data"),
        Stat::Unavailable => info!("Birth year: no data available for this city"),
    }
}
