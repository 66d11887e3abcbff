//! Supported cities and their backing data files.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::BikeshareError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// Every supported city, in menu order.
pub const ALL_CITIES: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

impl City {
    /// Canonical lowercase identifier.
    pub fn id(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's dataset inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new_york_city" | "nyc" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(BikeshareError::UnknownCity(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_cities() {
        assert_eq!("chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("  New York City ".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("nyc".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("WASHINGTON".parse::<City>().unwrap(), City::Washington);
    }

    #[test]
    fn test_parse_unknown_city() {
        let err = "boston".parse::<City>().unwrap_err();
        assert!(matches!(err, BikeshareError::UnknownCity(ref c) if c == "boston"));
    }

    #[test]
    fn test_ids_round_trip_through_parse() {
        for city in ALL_CITIES {
            assert_eq!(city.id().parse::<City>().unwrap(), city);
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
    }
}
