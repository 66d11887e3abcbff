//! Rider demographics: user type, gender and birth year.

use serde::Serialize;

use crate::stats::Stat;
use crate::stats::mode::{CategoryCount, first_mode, value_counts};
use crate::table::TripTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_types: Option<Vec<CategoryCount>>,
    pub gender: Stat<Vec<CategoryCount>>,
    pub birth_year: Stat<BirthYearStats>,
}

fn non_empty(counts: Vec<CategoryCount>) -> Option<Vec<CategoryCount>> {
    (!counts.is_empty()).then_some(counts)
}

fn birth_years(table: &TripTable) -> Option<BirthYearStats> {
    let years: Vec<i32> = table.iter().filter_map(|r| r.birth_year).collect();
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: first_mode(years.iter().copied())?,
    })
}

/// Gender and birth year are only computed when the dataset has the column
/// at all; otherwise they report [`Stat::Unavailable`] regardless of how
/// many rows were selected.
pub fn user_stats(table: &TripTable) -> UserStats {
    let schema = table.schema();

    let user_types = non_empty(value_counts(
        table.iter().filter_map(|r| r.user_type.as_deref()),
    ));

    let gender = Stat::from_column(
        schema.has_gender,
        schema
            .has_gender
            .then(|| non_empty(value_counts(table.iter().filter_map(|r| r.gender.as_deref()))))
            .flatten(),
    );

    let birth_year = Stat::from_column(
        schema.has_birth_year,
        schema.has_birth_year.then(|| birth_years(table)).flatten(),
    );

    UserStats {
        user_types,
        gender,
        birth_year,
    }
}
