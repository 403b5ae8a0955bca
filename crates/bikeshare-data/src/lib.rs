//! Data layer for the bikeshare explorer.
//!
//! Loads a city's CSV file into a filtered trip table and computes the
//! time, station, duration and user statistics over it.

pub mod frequency;
pub mod reader;
pub mod reporters;

pub use bikeshare_core as core;
