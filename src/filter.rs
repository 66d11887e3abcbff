//! Month / weekday filtering of trip tables.

use tracing::debug;

use crate::calendar::{DayFilter, FilterSelector, MonthFilter};
use crate::table::{TripRecord, TripTable};

/// Whether `record` passes both predicates of `selector`.
///
/// A record without a valid start time only passes an unrestricted selector.
pub fn matches(record: &TripRecord, selector: &FilterSelector) -> bool {
    if selector.is_unrestricted() {
        return true;
    }
    let Some(time) = record.start_time else {
        return false;
    };

    let month_ok = match selector.month {
        MonthFilter::All => true,
        MonthFilter::Only(month) => time.month == month.number(),
    };
    let day_ok = match selector.day {
        DayFilter::All => true,
        DayFilter::Only(day) => time.weekday == day,
    };
    month_ok && day_ok
}

/// Returns a new table holding the rows of `table` that match `selector`,
/// in their original relative order. `table` itself is left untouched.
#[tracing::instrument(skip(table), fields(city = table.city().id(), rows = table.len()))]
pub fn apply(table: &TripTable, selector: &FilterSelector) -> TripTable {
    let records: Vec<TripRecord> = table
        .iter()
        .filter(|r| matches(r, selector))
        .cloned()
        .collect();

    debug!(
        month = %selector.month,
        day = %selector.day,
        kept = records.len(),
        "Filter applied"
    );

    TripTable::new(table.city(), table.schema(), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Month;
    use crate::city::City;
    use crate::table::Schema;
    use crate::time::normalize;
    use chrono::Weekday;

    fn trip(start: &str, duration: f64) -> TripRecord {
        TripRecord {
            start_time: normalize(start),
            trip_duration: Some(duration),
            ..Default::default()
        }
    }

    fn durations(table: &TripTable) -> Vec<f64> {
        table.iter().filter_map(|r| r.trip_duration).collect()
    }

    // Jan 2 2017 Mon, Mar 7 Tue, Mar 13 Mon, Feb 6 Mon, unparseable
    fn sample() -> TripTable {
        TripTable::new(
            City::Chicago,
            Schema::full(),
            vec![
                trip("2017-01-02 08:00:00", 1.0),
                trip("2017-03-07 09:00:00", 2.0),
                trip("2017-03-13 10:00:00", 3.0),
                trip("2017-02-06 11:00:00", 4.0),
                trip("bad timestamp", 5.0),
            ],
        )
    }

    #[test]
    fn test_unrestricted_keeps_everything() {
        let table = sample();
        let out = apply(&table, &FilterSelector::default());
        assert_eq!(out, table);
    }

    #[test]
    fn test_month_filter_keeps_matching_rows_in_order() {
        let selector = FilterSelector::new(MonthFilter::Only(Month::March), DayFilter::All);
        let out = apply(&sample(), &selector);
        assert_eq!(durations(&out), vec![2.0, 3.0]);
        assert!(out.iter().all(|r| r.start_time.unwrap().month == 3));
    }

    #[test]
    fn test_day_filter() {
        let selector = FilterSelector::new(MonthFilter::All, DayFilter::Only(Weekday::Mon));
        let out = apply(&sample(), &selector);
        assert_eq!(durations(&out), vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_combined_filter() {
        let selector = FilterSelector::new(
            MonthFilter::Only(Month::March),
            DayFilter::Only(Weekday::Mon),
        );
        let out = apply(&sample(), &selector);
        assert_eq!(durations(&out), vec![3.0]);
    }

    #[test]
    fn test_invalid_timestamp_excluded_when_restricted() {
        let selector = FilterSelector::new(MonthFilter::All, DayFilter::Only(Weekday::Tue));
        let out = apply(&sample(), &selector);
        assert!(out.iter().all(|r| r.start_time.is_some()));
    }

    #[test]
    fn test_no_matches_is_empty_table() {
        let selector = FilterSelector::new(MonthFilter::Only(Month::June), DayFilter::All);
        let out = apply(&sample(), &selector);
        assert!(out.is_empty());
        assert_eq!(out.city(), City::Chicago);
        assert_eq!(out.schema(), Schema::full());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let selector = FilterSelector::new(
            MonthFilter::Only(Month::March),
            DayFilter::Only(Weekday::Tue),
        );
        let once = apply(&sample(), &selector);
        let twice = apply(&once, &selector);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_predicates_commute() {
        let month = FilterSelector::new(MonthFilter::Only(Month::March), DayFilter::All);
        let day = FilterSelector::new(MonthFilter::All, DayFilter::Only(Weekday::Mon));
        let both = FilterSelector::new(
            MonthFilter::Only(Month::March),
            DayFilter::Only(Weekday::Mon),
        );

        let month_then_day = apply(&apply(&sample(), &month), &day);
        let day_then_month = apply(&apply(&sample(), &day), &month);
        assert_eq!(month_then_day, day_then_month);
        assert_eq!(month_then_day, apply(&sample(), &both));
    }

    #[test]
    fn test_source_table_is_not_mutated() {
        let table = sample();
        let before = table.clone();
        let selector = FilterSelector::new(MonthFilter::Only(Month::January), DayFilter::All);
        let _ = apply(&table, &selector);
        assert_eq!(table, before);
    }
}
