use std::path::PathBuf;
use thiserror::Error;

use crate::models::City;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// The CSV file backing a city could not be opened or read.
    #[error("No trip data for {city}: failed to read {path}: {source}")]
    DatasetNotFound {
        city: City,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row in a city's CSV file could not be decoded.
    #[error("Malformed trip record in {city} data at line {line}: {reason}")]
    MalformedRecord {
        city: City,
        line: u64,
        reason: String,
    },

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The console input stream ended while waiting for an answer.
    #[error("Console input closed")]
    InputClosed,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
