//! Most frequent month, weekday and hour of travel.

use chrono::Weekday;
use serde::Serialize;

use crate::calendar::{month_name, weekday_name};
use crate::stats::mode::first_mode;
use crate::table::TripTable;
use crate::time::TripTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TravelTimeStats {
    /// Calendar month number, January = 1.
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl TravelTimeStats {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or("Unknown")
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// Rows without a valid start time do not participate. `None` when no row
/// has one.
pub fn travel_time_stats(table: &TripTable) -> Option<TravelTimeStats> {
    let times: Vec<&TripTime> = table.iter().filter_map(|r| r.start_time.as_ref()).collect();

    Some(TravelTimeStats {
        month: first_mode(times.iter().map(|t| t.month))?,
        weekday: first_mode(times.iter().map(|t| t.weekday))?,
        hour: first_mode(times.iter().map(|t| t.hour))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;
    use crate::table::{Schema, TripRecord};
    use crate::time::normalize;

    fn table(starts: &[&str]) -> TripTable {
        let records = starts
            .iter()
            .map(|s| TripRecord {
                start_time: normalize(s),
                ..Default::default()
            })
            .collect();
        TripTable::new(City::Chicago, Schema::full(), records)
    }

    #[test]
    fn test_most_common_times() {
        let t = table(&[
            "2017-03-06 08:15:00", // Mon
            "2017-03-07 17:00:00", // Tue
            "2017-03-13 08:45:00", // Mon
            "2017-01-10 17:30:00", // Tue
            "2017-01-16 08:00:00", // Mon
        ]);
        let stats = travel_time_stats(&t).unwrap();
        assert_eq!(stats.month, 3);
        assert_eq!(stats.month_name(), "March");
        assert_eq!(stats.weekday, Weekday::Mon);
        assert_eq!(stats.weekday_name(), "Monday");
        assert_eq!(stats.hour, 8);
    }

    #[test]
    fn test_month_name_outside_filterable_range() {
        let t = table(&["2017-09-04 10:00:00"]);
        let stats = travel_time_stats(&t).unwrap();
        assert_eq!(stats.month, 9);
        assert_eq!(stats.month_name(), "September");
    }

    #[test]
    fn test_hour_tie_prefers_first_seen() {
        let t = table(&[
            "2017-01-02 05:00:00",
            "2017-01-02 05:30:00",
            "2017-01-02 09:00:00",
            "2017-01-02 09:30:00",
        ]);
        assert_eq!(travel_time_stats(&t).unwrap().hour, 5);
    }

    #[test]
    fn test_invalid_timestamps_are_skipped() {
        let t = table(&["junk", "junk", "2017-02-01 12:00:00"]);
        let stats = travel_time_stats(&t).unwrap();
        assert_eq!(stats.month, 2);
        assert_eq!(stats.hour, 12);
    }

    #[test]
    fn test_no_data() {
        assert!(travel_time_stats(&table(&[])).is_none());
        assert!(travel_time_stats(&table(&["junk"])).is_none());
    }
}
