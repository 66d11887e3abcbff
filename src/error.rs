//! Error taxonomy for loading and filtering trip data.
//!
//! Only structural problems are errors. Unparseable timestamps and numbers
//! are recovered as nulls by the loader and never show up here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BikeshareError {
    /// The requested city is not one of the supported datasets.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// A month or weekday selector could not be parsed.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file lacks one of the columns every city dataset must carry.
    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BikeshareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_city_display() {
        let err = BikeshareError::UnknownCity("boston".to_string());
        assert_eq!(err.to_string(), "Unknown city: boston");
    }

    #[test]
    fn test_file_read_display_includes_path() {
        let err = BikeshareError::FileRead {
            path: PathBuf::from("/data/chicago.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/chicago.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = BikeshareError::MissingColumn {
            column: "Start Time",
        };
        assert_eq!(err.to_string(), "Missing required column: Start Time");
    }
}
