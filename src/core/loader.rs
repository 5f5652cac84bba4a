//! Dataset loading: read a city file, derive month / weekday / hour, filter.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{DayFilter, Filters, MonthFilter, Trip, TripTable};
use crate::utils::date::parse_timestamp;

pub const COL_START_TIME: &str = "Start Time";
pub const COL_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

/// Column positions resolved from the header row.
struct Columns {
    start_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let required =
            |name: &str| find(name).ok_or_else(|| AppError::MissingColumn(name.to_string()));

        Ok(Self {
            start_time: required(COL_START_TIME)?,
            duration: required(COL_DURATION)?,
            start_station: required(COL_START_STATION)?,
            end_station: required(COL_END_STATION)?,
            user_type: required(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

fn optional_text(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.map(|i| cell(record, i))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_duration(value: &str, row: usize) -> AppResult<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(AppError::InvalidNumber {
            column: COL_DURATION.to_string(),
            row,
            value: value.to_string(),
        }),
    }
}

/// Accepts "1992" as well as "1992.0"; blank cells are absent values.
fn parse_birth_year(value: &str, row: usize) -> AppResult<Option<i32>> {
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v.round() as i32)),
        _ => Err(AppError::InvalidNumber {
            column: COL_BIRTH_YEAR.to_string(),
            row,
            value: value.to_string(),
        }),
    }
}

/// Parse a whole city table from any CSV source.
///
/// Row numbers in errors are 1-based and count data rows only.
pub fn read_trips<R: Read>(reader: R) -> AppResult<TripTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = Columns::resolve(&headers)?;

    let mut trips = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let ts = cell(&record, cols.start_time);
        let start_time = parse_timestamp(ts).ok_or_else(|| AppError::InvalidTimestamp {
            row,
            value: ts.to_string(),
        })?;

        trips.push(Trip::new(
            start_time,
            parse_duration(cell(&record, cols.duration), row)?,
            cell(&record, cols.start_station).to_string(),
            cell(&record, cols.end_station).to_string(),
            optional_text(&record, Some(cols.user_type)),
            optional_text(&record, cols.gender),
            match cols.birth_year {
                Some(idx) => parse_birth_year(cell(&record, idx), row)?,
                None => None,
            },
            record.iter().map(str::to_string).collect(),
        ));
    }

    Ok(TripTable {
        headers: headers.iter().map(str::to_string).collect(),
        trips,
        has_gender: cols.gender.is_some(),
        has_birth_year: cols.birth_year.is_some(),
    })
}

pub fn load_file(path: &Path) -> AppResult<TripTable> {
    if !path.exists() {
        return Err(AppError::DataFile {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    read_trips(file)
}

/// Narrow the table to the requested month and day.
pub fn apply_filters(mut table: TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    let before = table.len();
    table.retain_matching(month, day);
    debug!(before, after = table.len(), %month, %day, "filters applied");
    table
}

/// Load the city file named by `filters` and apply its month / day filters.
pub fn load_data(cfg: &Config, filters: &Filters) -> AppResult<TripTable> {
    let path = cfg.city_file(filters.city);
    debug!(city = %filters.city, path = %path.display(), "loading city data");

    let table = load_file(&path)?;
    debug!(rows = table.len(), "city data loaded");

    Ok(apply_filters(table, filters.month, filters.day))
}
