//! CLI entry point for the bikeshare statistics tool.
//!
//! Loads one city's trip data, applies an optional month/weekday filter and
//! reports travel-time, station, duration and rider statistics.

use anyhow::Result;
use bikeshare_stats::calendar::{DayFilter, FilterSelector, MonthFilter};
use bikeshare_stats::city::{ALL_CITIES, City};
use bikeshare_stats::config::Settings;
use bikeshare_stats::output::{log_report, print_pretty, write_json};
use bikeshare_stats::report::run;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Descriptive statistics for US bikeshare trip data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute statistics for a city, optionally filtered by month and day
    Analyze {
        /// City to analyze (chicago, new york city, washington)
        #[arg(short, long)]
        city: City,

        /// Month to filter by: 1-6, a name such as "march", or "all"
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// Day to filter by: 1-7 with Monday=1, a name such as "friday", or "all"
        #[arg(short, long, default_value = "all")]
        day: DayFilter,

        /// Directory containing the city CSV files (overrides BIKESHARE_DATA_DIR)
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Print the full report as JSON to stdout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the supported cities and their data files
    Cities,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    let settings = Settings::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = settings
        .log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = settings
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            city,
            month,
            day,
            data_dir,
            json,
        } => {
            let settings = settings.with_data_dir(data_dir);
            let selector = FilterSelector::new(month, day);
            info!(
                city = %city,
                month = %month,
                day = %day,
                data_dir = %settings.data_dir.display(),
                "Gathering statistics"
            );

            let report = run(city, &selector, &settings.data_dir)?;

            print_pretty(&report);
            if json {
                write_json(std::io::stdout().lock(), &report)?;
            } else {
                log_report(&report);
            }
        }
        Commands::Cities => {
            for city in ALL_CITIES {
                info!(id = city.id(), file = city.file_name(), "City");
            }
        }
    }

    Ok(())
}
