//! The four statistics passes over a [`FilteredTable`].
//!
//! Each reporter is a pure function of the table. None of them fail: a
//! statistic that cannot be computed on an empty table comes back as
//! [`Stat::NoData`], and one whose column the city does not publish comes back
//! as [`Stat::NotAvailable`].

use std::time::{Duration, Instant};

use bikeshare_core::models::FilteredTable;
use chrono::Weekday;
use tracing::debug;

use crate::frequency::ValueCounts;

// ── Stat ──────────────────────────────────────────────────────────────────────

/// Outcome of a single statistic.
#[derive(Debug, Clone, PartialEq)]
pub enum Stat<T> {
    Value(T),
    /// The column exists but there were no rows (or no non-blank cells).
    NoData,
    /// The city's dataset has no such column.
    NotAvailable,
}

impl<T> Stat<T> {
    /// `Some` → [`Stat::Value`], `None` → [`Stat::NoData`].
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Stat::NoData, Stat::Value)
    }
}

/// The most common value of a column and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Mode<T> {
    fn from_pair((value, count): (T, usize)) -> Self {
        Self { value, count }
    }
}

/// Per-value counts, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub entries: Vec<(String, usize)>,
    /// Number of non-blank cells counted.
    pub counted: usize,
}

fn mode_of<T, I>(values: I) -> Stat<Mode<T>>
where
    T: std::hash::Hash + Eq,
    I: IntoIterator<Item = T>,
{
    Stat::from_option(ValueCounts::from_values(values).into_mode().map(Mode::from_pair))
}

fn breakdown_of<I: IntoIterator<Item = String>>(values: I) -> Stat<Breakdown> {
    let counts = ValueCounts::from_values(values);
    if counts.is_empty() {
        return Stat::NoData;
    }
    let counted = counts.total();
    Stat::Value(Breakdown {
        entries: counts.into_sorted(),
        counted,
    })
}

// ── Time of travel ────────────────────────────────────────────────────────────

/// Most frequent times of travel.
#[derive(Debug, Clone)]
pub struct TimeStats {
    /// Calendar month number (January = 1).
    pub popular_month: Stat<Mode<u32>>,
    pub popular_day: Stat<Mode<Weekday>>,
    /// Start hour, `0..=23`.
    pub popular_hour: Stat<Mode<u32>>,
    pub elapsed: Duration,
}

pub fn time_stats(table: &FilteredTable) -> TimeStats {
    let started = Instant::now();

    let popular_month = mode_of(table.trips.iter().map(|t| t.month));
    let popular_day = mode_of(table.trips.iter().map(|t| t.weekday));
    let popular_hour = mode_of(table.trips.iter().map(|t| t.hour));

    let elapsed = started.elapsed();
    debug!("time stats over {} trips took {:?}", table.len(), elapsed);

    TimeStats {
        popular_month,
        popular_day,
        popular_hour,
        elapsed,
    }
}

// ── Stations ──────────────────────────────────────────────────────────────────

/// Most popular stations and route.
#[derive(Debug, Clone)]
pub struct StationStats {
    pub popular_start: Stat<Mode<String>>,
    pub popular_end: Stat<Mode<String>>,
    /// Keyed as `"<start> to <end>"`.
    pub popular_route: Stat<Mode<String>>,
    pub elapsed: Duration,
}

pub fn station_stats(table: &FilteredTable) -> StationStats {
    let started = Instant::now();

    // Blank stations are skipped, and so is any route missing either end.
    let popular_start = mode_of(table.trips.iter().filter_map(|t| t.start_station.as_deref()));
    let popular_end = mode_of(table.trips.iter().filter_map(|t| t.end_station.as_deref()));
    let popular_route = mode_of(table.trips.iter().filter_map(|t| t.route()));

    let elapsed = started.elapsed();
    debug!("station stats over {} trips took {:?}", table.len(), elapsed);

    StationStats {
        popular_start: to_owned_mode(popular_start),
        popular_end: to_owned_mode(popular_end),
        popular_route,
        elapsed,
    }
}

fn to_owned_mode(stat: Stat<Mode<&str>>) -> Stat<Mode<String>> {
    match stat {
        Stat::Value(m) => Stat::Value(Mode {
            value: m.value.to_string(),
            count: m.count,
        }),
        Stat::NoData => Stat::NoData,
        Stat::NotAvailable => Stat::NotAvailable,
    }
}

// ── Trip duration ─────────────────────────────────────────────────────────────

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone)]
pub struct DurationStats {
    /// Trips with a recorded duration; blank cells are not counted.
    pub trips: usize,
    pub total_seconds: Stat<f64>,
    pub mean_seconds: Stat<f64>,
    pub elapsed: Duration,
}

pub fn trip_duration_stats(table: &FilteredTable) -> DurationStats {
    let started = Instant::now();

    let durations: Vec<f64> = table.trips.iter().filter_map(|t| t.trip_duration).collect();
    let trips = durations.len();
    let (total_seconds, mean_seconds) = if trips == 0 {
        (Stat::NoData, Stat::NoData)
    } else {
        let total: f64 = durations.iter().sum();
        (Stat::Value(total), Stat::Value(total / trips as f64))
    };

    let elapsed = started.elapsed();
    debug!("duration stats over {} trips took {:?}", trips, elapsed);

    DurationStats {
        trips,
        total_seconds,
        mean_seconds,
        elapsed,
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// User type counts and, where published, gender and birth-year statistics.
#[derive(Debug, Clone)]
pub struct UserStats {
    pub user_types: Stat<Breakdown>,
    pub genders: Stat<Breakdown>,
    pub earliest_birth_year: Stat<i32>,
    pub latest_birth_year: Stat<i32>,
    pub popular_birth_year: Stat<Mode<i32>>,
    pub elapsed: Duration,
}

pub fn user_stats(table: &FilteredTable) -> UserStats {
    let started = Instant::now();

    let user_types = breakdown_of(table.trips.iter().filter_map(|t| t.user_type.clone()));

    let genders = if table.schema.has_gender {
        breakdown_of(table.trips.iter().filter_map(|t| t.gender.clone()))
    } else {
        Stat::NotAvailable
    };

    let (earliest_birth_year, latest_birth_year, popular_birth_year) =
        if table.schema.has_birth_year {
            let years: Vec<i32> = table.trips.iter().filter_map(|t| t.birth_year).collect();
            (
                Stat::from_option(years.iter().min().copied()),
                Stat::from_option(years.iter().max().copied()),
                mode_of(years),
            )
        } else {
            (Stat::NotAvailable, Stat::NotAvailable, Stat::NotAvailable)
        };

    let elapsed = started.elapsed();
    debug!("user stats over {} trips took {:?}", table.len(), elapsed);

    UserStats {
        user_types,
        genders,
        earliest_birth_year,
        latest_birth_year,
        popular_birth_year,
        elapsed,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
