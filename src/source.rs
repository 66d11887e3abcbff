//! Loads a city's CSV export into a [`TripTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::city::City;
use crate::error::{BikeshareError, Result};
use crate::table::{
    BIRTH_YEAR, END_STATION, END_TIME, GENDER, START_STATION, START_TIME, Schema, TRIP_DURATION,
    TripRecord, TripTable, USER_TYPE,
};
use crate::time::{normalize, parse_timestamp};

/// Header positions resolved once per file.
struct Columns {
    start_time: usize,
    end_time: Option<usize>,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| {
            find(name).ok_or(BikeshareError::MissingColumn { column: name })
        };

        Ok(Self {
            start_time: require(START_TIME)?,
            end_time: find(END_TIME),
            trip_duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn record(&self, row: &ByteRecord) -> TripRecord {
        let text = |idx: usize| field(row, idx);
        let optional = |idx: Option<usize>| idx.and_then(|i| field(row, i));

        TripRecord {
            start_time: text(self.start_time).as_deref().and_then(normalize),
            end_time: optional(self.end_time).as_deref().and_then(parse_timestamp),
            trip_duration: text(self.trip_duration).as_deref().and_then(parse_duration),
            start_station: text(self.start_station),
            end_station: text(self.end_station),
            user_type: text(self.user_type),
            gender: optional(self.gender),
            birth_year: optional(self.birth_year).as_deref().and_then(parse_year),
        }
    }
}

/// Trimmed field text; invalid UTF-8 is replaced rather than rejected.
fn field(row: &ByteRecord, idx: usize) -> Option<String> {
    let raw = String::from_utf8_lossy(row.get(idx)?);
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Seconds; negative or non-finite values are treated as missing.
fn parse_duration(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}

/// Accepts `1989` as well as the float rendering `1989.0`.
fn parse_year(raw: &str) -> Option<i32> {
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

/// Reads every row from `reader` in order.
///
/// Field-level parse failures become `None`; only a missing required column
/// or a malformed CSV stream is an error.
pub fn read_table<R: Read>(city: City, reader: R) -> Result<TripTable> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::resolve(&headers)?;
    let schema = Schema::from_headers(headers.iter());

    let mut records = Vec::new();
    let mut lossy_rows = 0usize;
    for result in rdr.byte_records() {
        let row = result?;
        if std::str::from_utf8(row.as_slice()).is_err() {
            lossy_rows += 1;
        }
        records.push(columns.record(&row));
    }

    if lossy_rows > 0 {
        warn!(city = city.id(), lossy_rows, "Rows with invalid UTF-8 decoded lossily");
    }

    let invalid_start_times = records.iter().filter(|r| r.start_time.is_none()).count();
    if invalid_start_times > 0 {
        warn!(
            city = city.id(),
            invalid_start_times, "Rows with unparseable start time"
        );
    }
    debug!(
        city = city.id(),
        has_gender = schema.has_gender,
        has_birth_year = schema.has_birth_year,
        has_end_time = schema.has_end_time,
        "Detected optional columns"
    );

    Ok(TripTable::new(city, schema, records))
}

/// Loads `city`'s dataset from `data_dir`.
#[tracing::instrument(skip(data_dir))]
pub fn load(city: City, data_dir: &Path) -> Result<TripTable> {
    let path = data_dir.join(city.file_name());
    let file = File::open(&path).map_err(|source| BikeshareError::FileRead {
        path: path.clone(),
        source,
    })?;

    let table = read_table(city, file)?;
    info!(path = %path.display(), rows = table.len(), "Trip data loaded");
    Ok(table)
}

/// Resolves a textual city identifier and loads it.
///
/// Fails with [`BikeshareError::UnknownCity`] before touching the filesystem
/// if the identifier is not supported.
pub fn load_city(city_id: &str, data_dir: &Path) -> Result<TripTable> {
    let city: City = city_id.parse()?;
    load(city, data_dir)
}
