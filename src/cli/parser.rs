use crate::models::{City, DayFilter, MonthFilter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for bikeshare
/// CLI application to explore US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: popular times, stations, trip durations and user stats",
    long_about = None
)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Use this configuration file instead of ~/.bikeshare/bikeshare.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Diagnostic log filter (error, warn, info, debug, trace)
    #[arg(global = true, long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session (default when no command is given)
    Explore,

    /// Print the statistics for one selection, without prompting
    Stats {
        #[arg(long, value_parser = parse_city, help = "chicago, \"new york city\" or washington")]
        city: City,

        #[arg(long, value_parser = parse_month, default_value = "all", help = "january..june, or all")]
        month: MonthFilter,

        #[arg(long, value_parser = parse_day, default_value = "all", help = "sunday..saturday, or all")]
        day: DayFilter,

        #[arg(long, value_name = "N", help = "Also print the first N filtered rows")]
        raw: Option<usize>,
    },

    /// Print or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        #[arg(long = "force", requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}

fn parse_city(s: &str) -> Result<City, String> {
    City::from_input(s).ok_or_else(|| format!("unknown city '{s}'"))
}

fn parse_month(s: &str) -> Result<MonthFilter, String> {
    MonthFilter::from_input(s).ok_or_else(|| format!("month must be january..june or all, got '{s}'"))
}

fn parse_day(s: &str) -> Result<DayFilter, String> {
    DayFilter::from_input(s).ok_or_else(|| format!("day must be sunday..saturday or all, got '{s}'"))
}
