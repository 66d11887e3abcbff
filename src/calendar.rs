//! Month and weekday enumerations shared by the normalizer, the filter and
//! the statistics.
//!
//! Months are numbered from 1 (January) and weekdays are indexed from 0
//! (Monday). Both conventions live here and nowhere else.

use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::BikeshareError;

/// The months covered by the bikeshare datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

pub const ALL_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays in index order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Calendar month names indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of calendar month `n` (1-12), including months outside the datasets.
pub fn month_name(n: u32) -> Option<&'static str> {
    MONTH_NAMES.get((n as usize).checked_sub(1)?).copied()
}

impl Month {
    /// Calendar month number, January = 1.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Returns `None` for numbers outside 1..=6, including July onwards.
    pub fn from_number(n: u32) -> Option<Month> {
        ALL_MONTHS.get((n as usize).checked_sub(1)?).copied()
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monday = 0 .. Sunday = 6.
pub fn weekday_index(day: Weekday) -> u32 {
    day.num_days_from_monday()
}

pub fn weekday_from_index(index: u32) -> Option<Weekday> {
    WEEKDAYS.get(index as usize).copied()
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

/// A (month, weekday) restriction applied to a trip table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterSelector {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelector {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }
}

fn is_all(s: &str) -> bool {
    matches!(s, "a" | "all")
}

/// Matches full names and three-letter prefixes, e.g. `mar` or `march`.
fn month_name_position(s: &str) -> Option<usize> {
    if s.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase().starts_with(s))
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    /// Accepts `all`/`a`, a number 1-6, or an English month name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if is_all(&s) {
            return Ok(MonthFilter::All);
        }

        let number = match s.parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => month_name_position(&s).map(|pos| pos as u32 + 1),
        };

        match number {
            Some(n) => Month::from_number(n).map(MonthFilter::Only).ok_or_else(|| {
                BikeshareError::InvalidFilter(format!(
                    "month '{s}' is outside the available range (January to June)"
                ))
            }),
            None => Err(BikeshareError::InvalidFilter(format!(
                "unrecognized month '{s}'"
            ))),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    /// Accepts `all`/`a`, a number 1-7 with Monday = 1, or a weekday name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if is_all(&s) {
            return Ok(DayFilter::All);
        }

        if let Ok(n) = s.parse::<u32>() {
            return n
                .checked_sub(1)
                .and_then(weekday_from_index)
                .map(DayFilter::Only)
                .ok_or_else(|| {
                    BikeshareError::InvalidFilter(format!("day number {n} is outside 1-7"))
                });
        }

        s.parse::<Weekday>()
            .map(DayFilter::Only)
            .map_err(|_| BikeshareError::InvalidFilter(format!("unrecognized day '{s}'")))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}
