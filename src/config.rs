//! Runtime settings read from the environment (and `.env`).

use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "BIKESHARE_DATA_DIR";
pub const LOG_FILE_VAR: &str = "LOG_FILE_PATH";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LOG_FILE: &str = "logs/bikeshare_stats.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the per-city CSV files.
    pub data_dir: PathBuf,
    pub log_file_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenvy::dotenv()`
    /// first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup; empty values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Settings::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            data_dir: get(DATA_DIR_VAR).map_or(defaults.data_dir, PathBuf::from),
            log_file_path: get(LOG_FILE_VAR).map_or(defaults.log_file_path, PathBuf::from),
        }
    }

    /// Replaces the data directory when a CLI override is given.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}
