//! Shared domain types for the bikeshare explorer.
//!
//! Cities, month/day filters, trip records, the error type, command-line
//! settings and the small formatting helpers used by the report views.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{BikeshareError, Result};
