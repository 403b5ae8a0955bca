use chrono::NaiveDateTime;

use crate::error::{BikeshareError, Result};

/// Layouts accepted for the `Start Time` / `End Time` columns.
///
/// The published datasets use `2017-06-23 15:09:32`; the `T`-separated and
/// fractional-second variants show up in re-exported files.
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a trip timestamp as naive local time.
///
/// Leading and trailing whitespace is ignored.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(BikeshareError::TimestampParse(s.to_string()));
    }

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| BikeshareError::TimestampParse(s.to_string()))
}
