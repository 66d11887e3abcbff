//! Descriptive statistics over a (filtered) trip table.
//!
//! Each group is computed independently. Groups over always-present columns
//! return `Option` (`None` when nothing contributes); statistics over
//! optional columns use [`Stat`] so a structurally missing column can be told
//! apart from an empty selection.

pub mod duration;
pub mod mode;
pub mod station;
pub mod travel;
pub mod user;

use serde::Serialize;

pub use duration::{DurationStats, duration_stats};
pub use mode::{CategoryCount, first_mode, value_counts};
pub use station::{StationPair, StationStats, station_stats};
pub use travel::{TravelTimeStats, travel_time_stats};
pub use user::{BirthYearStats, UserStats, user_stats};

/// Result of a statistic that depends on an optional column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Stat<T> {
    /// The dataset has no such column.
    Unavailable,
    /// The column exists but no row in the selection has a value.
    NoData,
    Value(T),
}

impl<T> Stat<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Stat::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Stat::Unavailable)
    }

    /// `Unavailable` if `present` is false, otherwise `NoData` or `Value`.
    pub fn from_column(present: bool, value: Option<T>) -> Self {
        match (present, value) {
            (false, _) => Stat::Unavailable,
            (true, None) => Stat::NoData,
            (true, Some(v)) => Stat::Value(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_from_column() {
        assert_eq!(Stat::from_column(false, Some(1)), Stat::Unavailable);
        assert_eq!(Stat::<i32>::from_column(true, None), Stat::NoData);
        assert_eq!(Stat::from_column(true, Some(1)), Stat::Value(1));
    }

    #[test]
    fn test_stat_serializes_with_status_tag() {
        let json = serde_json::to_value(Stat::Value(3)).unwrap();
        assert_eq!(json["status"], "value");
        assert_eq!(json["value"], 3);

        let json = serde_json::to_value(Stat::<i32>::Unavailable).unwrap();
        assert_eq!(json["status"], "unavailable");
    }
}
