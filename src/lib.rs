pub mod calendar;
pub mod city;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod report;
pub mod source;
pub mod stats;
pub mod table;
pub mod time;

pub use error::{BikeshareError, Result};
