//! CSV loading and month/day filtering for a city's trip data.
//!
//! Reads `<data_dir>/<city>.csv`, decodes every row into a [`TripRecord`]
//! and keeps the rows matching the chosen [`Filter`]s. Blank cells outside
//! `Start Time` load as missing values; any cell that is present but
//! undecodable rejects the whole load.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{
    City, Filter, FilterSelection, FilteredTable, Month, Schema, TripRecord,
};
use bikeshare_core::time_utils::parse_timestamp;
use chrono::Weekday;
use serde::Deserialize;
use tracing::debug;

/// Columns every city file must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

pub const GENDER_COLUMN: &str = "Gender";
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// One CSV row as stored on disk. Unknown columns (such as the unnamed
/// leading index column) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    // Stored as "1989.0" in the published files.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ── DatasetLoader ─────────────────────────────────────────────────────────────

/// Resolves cities to CSV files under a data directory and loads them.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the CSV file backing `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Load `city` and keep the trips matching both `month` and `day`.
    ///
    /// An empty result is not an error.
    pub fn load(
        &self,
        city: City,
        month: Filter<Month>,
        day: Filter<Weekday>,
    ) -> Result<FilteredTable> {
        let path = self.path_for(city);
        let file = File::open(&path).map_err(|source| BikeshareError::DatasetNotFound {
            city,
            path: path.clone(),
            source,
        })?;

        let (schema, trips) = read_trips(city, &path, file)?;
        let total_rows = trips.len();
        let trips = apply_filters(trips, month, day);

        debug!(
            "Loaded {}: {} rows read, {} kept (month: {}, day: {})",
            path.display(),
            total_rows,
            trips.len(),
            month,
            day
        );

        Ok(FilteredTable {
            city,
            schema,
            total_rows,
            trips,
        })
    }

    /// Convenience wrapper taking the whole selection triple.
    pub fn load_selection(&self, selection: &FilterSelection) -> Result<FilteredTable> {
        self.load(selection.city, selection.month, selection.day)
    }
}

// ── Filtering ─────────────────────────────────────────────────────────────────

/// Keep trips whose start month matches `month`.
pub fn filter_by_month(trips: Vec<TripRecord>, month: Filter<Month>) -> Vec<TripRecord> {
    match month {
        Filter::All => trips,
        Filter::Only(m) => trips
            .into_iter()
            .filter(|t| t.month == m.number())
            .collect(),
    }
}

/// Keep trips whose start weekday matches `day`.
pub fn filter_by_day(trips: Vec<TripRecord>, day: Filter<Weekday>) -> Vec<TripRecord> {
    trips
        .into_iter()
        .filter(|t| day.matches(&t.weekday))
        .collect()
}

/// Apply both filters. The order is irrelevant; the filters are independent.
pub fn apply_filters(
    trips: Vec<TripRecord>,
    month: Filter<Month>,
    day: Filter<Weekday>,
) -> Vec<TripRecord> {
    filter_by_day(filter_by_month(trips, month), day)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Decode every row of a city file.
fn read_trips<R: Read>(city: City, path: &Path, reader: R) -> Result<(Schema, Vec<TripRecord>)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| map_csv_error(city, path, e))?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(BikeshareError::MalformedRecord {
            city,
            line: 1,
            reason: format!("missing required column \"{}\"", missing),
        });
    }

    let schema = Schema {
        has_gender: headers.iter().any(|h| h == GENDER_COLUMN),
        has_birth_year: headers.iter().any(|h| h == BIRTH_YEAR_COLUMN),
    };

    let mut trips = Vec::new();
    for (position, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| map_csv_error(city, path, e))?;
        // Header is line 1, so the first data row is line 2.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(position as u64 + 2);

        let raw: RawTrip =
            record
                .deserialize(Some(&headers))
                .map_err(|e| BikeshareError::MalformedRecord {
                    city,
                    line,
                    reason: e.to_string(),
                })?;

        let start_time =
            parse_timestamp(&raw.start_time).map_err(|e| BikeshareError::MalformedRecord {
                city,
                line,
                reason: e.to_string(),
            })?;

        trips.push(TripRecord::new(
            position,
            start_time,
            raw.end_time,
            raw.trip_duration,
            raw.start_station,
            raw.end_station,
            raw.user_type,
            raw.gender,
            raw.birth_year.map(|y| y.round() as i32),
        ));
    }

    Ok((schema, trips))
}

/// Translate a `csv` error: I/O failures mean the file is unreadable, anything
/// else is a malformed record.
fn map_csv_error(city: City, path: &Path, err: csv::Error) -> BikeshareError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => BikeshareError::DatasetNotFound {
            city,
            path: path.to_path_buf(),
            source,
        },
        _ => BikeshareError::MalformedRecord { city, line, reason },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
