//! In-memory trip records for a single city.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::city::City;
use crate::time::TripTime;

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Which optional columns a loaded file actually carries.
///
/// Detected once per load from the header row. Statistics consult this
/// instead of inspecting individual values, so a column that exists but is
/// empty everywhere is distinguishable from one that is not there at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    pub fn full() -> Self {
        Self {
            has_end_time: true,
            has_gender: true,
            has_birth_year: true,
        }
    }

    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut schema = Schema::default();
        for header in headers {
            match header.trim() {
                END_TIME => schema.has_end_time = true,
                GENDER => schema.has_gender = true,
                BIRTH_YEAR => schema.has_birth_year = true,
                _ => {}
            }
        }
        schema
    }
}

/// One bikeshare ride. Missing or unparseable fields are `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TripRecord {
    pub start_time: Option<TripTime>,
    pub end_time: Option<NaiveDateTime>,
    /// Seconds.
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

/// Trip records of one city in source-file order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    schema: Schema,
    records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, schema: Schema, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            schema,
            records,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TripRecord> {
        self.records.get(index)
    }

    /// Up to `count` rows starting at `start`, clamped to the table bounds.
    pub fn rows(&self, start: usize, count: usize) -> &[TripRecord] {
        let start = start.min(self.records.len());
        let end = start.saturating_add(count).min(self.records.len());
        &self.records[start..end]
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
