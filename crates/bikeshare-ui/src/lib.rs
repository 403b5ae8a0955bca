//! Console layer for the bikeshare explorer.
//!
//! Provides the prompt/answer console, the filter collector, plain-text
//! report and row views, the row paginator and the session loop that ties
//! them together.

pub mod app;
pub mod console;
pub mod input;
pub mod paginator;
pub mod report_view;
pub mod table_view;

pub use bikeshare_core as core;
