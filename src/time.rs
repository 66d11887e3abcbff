//! Start-time parsing and derived calendar fields.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use crate::calendar::weekday_index;

/// Naive (local, no timezone) formats seen in the city exports.
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A parsed start time together with the fields derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripTime {
    pub timestamp: NaiveDateTime,
    /// Calendar month, January = 1.
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl TripTime {
    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            month: timestamp.month(),
            weekday: timestamp.weekday(),
            hour: timestamp.hour(),
        }
    }

    /// Monday = 0.
    pub fn weekday_index(&self) -> u32 {
        weekday_index(self.weekday)
    }
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Parses a start-time field. Unparseable input yields `None`, never an error.
pub fn normalize(raw: &str) -> Option<TripTime> {
    parse_timestamp(raw).map(TripTime::from_timestamp)
}
