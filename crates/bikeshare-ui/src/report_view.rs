//! Plain-text rendering of the statistics reports.
//!
//! Every writer here takes the report by reference and returns an
//! [`io::Result`], so a failure in one section never prevents the caller
//! from rendering the next.

use std::io::{self, Write};
use std::time::Duration;

use bikeshare_core::formatting::{format_count, format_duration, format_number, percentage};
use bikeshare_core::models::{month_display_name, weekday_name, FilteredTable};
use bikeshare_data::reporters::{
    Breakdown, DurationStats, Mode, Stat, StationStats, TimeStats, UserStats,
};
use unicode_width::UnicodeWidthStr;

/// Rule printed after each section.
pub const SEPARATOR: &str = "----------------------------------------";

pub const NO_DATA: &str = "no data available";
pub const NOT_AVAILABLE: &str = "not available for this city";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn describe<T>(stat: &Stat<T>, render: impl Fn(&T) -> String) -> String {
    match stat {
        Stat::Value(v) => render(v),
        Stat::NoData => NO_DATA.to_string(),
        Stat::NotAvailable => NOT_AVAILABLE.to_string(),
    }
}

fn with_count<T>(mode: &Mode<T>, label: impl Fn(&T) -> String, unit: &str) -> String {
    format!("{} ({} {})", label(&mode.value), format_count(mode.count), unit)
}

fn write_breakdown(out: &mut impl Write, title: &str, stat: &Stat<Breakdown>) -> io::Result<()> {
    match stat {
        Stat::Value(breakdown) => {
            writeln!(out, "{}:", title)?;
            let width = breakdown
                .entries
                .iter()
                .map(|(value, _)| value.width())
                .max()
                .unwrap_or(0);
            for (value, count) in &breakdown.entries {
                let share = percentage(*count as f64, breakdown.counted as f64, 1);
                // `{:<width$}` pads by chars, so fill by display width instead.
                let fill = " ".repeat(width - value.width());
                writeln!(
                    out,
                    "  {}{}  {} ({:.1}%)",
                    value,
                    fill,
                    format_count(*count),
                    share
                )?;
            }
            Ok(())
        }
        other => writeln!(out, "{}: {}", title, describe(other, |_| String::new())),
    }
}

fn write_footer(out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", SEPARATOR)
}

fn month_label(number: &u32) -> String {
    month_display_name(*number)
        .map(str::to_string)
        .unwrap_or_else(|| format!("month {}", number))
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// One-line summary of what was loaded.
pub fn write_table_summary(out: &mut impl Write, table: &FilteredTable) -> io::Result<()> {
    writeln!(
        out,
        "\nAnalysing {} of {} {} trips.",
        format_count(table.len()),
        format_count(table.total_rows),
        table.city
    )
}

pub fn write_time_stats(out: &mut impl Write, stats: &TimeStats) -> io::Result<()> {
    writeln!(out, "\nCalculating the most frequent times of travel...\n")?;
    writeln!(
        out,
        "Most common month: {}",
        describe(&stats.popular_month, |m| with_count(m, month_label, "trips"))
    )?;
    writeln!(
        out,
        "Most common day of week: {}",
        describe(&stats.popular_day, |m| with_count(
            m,
            |d| weekday_name(*d).to_string(),
            "trips"
        ))
    )?;
    writeln!(
        out,
        "Most common start hour: {}",
        describe(&stats.popular_hour, |m| with_count(
            m,
            |h| format!("{:02}:00", h),
            "trips"
        ))
    )?;
    write_footer(out, stats.elapsed)
}

pub fn write_station_stats(out: &mut impl Write, stats: &StationStats) -> io::Result<()> {
    writeln!(
        out,
        "\nCalculating the most popular stations and trip...\n"
    )?;
    writeln!(
        out,
        "Most commonly used start station: {}",
        describe(&stats.popular_start, |m| with_count(m, String::clone, "trips"))
    )?;
    writeln!(
        out,
        "Most commonly used end station: {}",
        describe(&stats.popular_end, |m| with_count(m, String::clone, "trips"))
    )?;
    writeln!(
        out,
        "Most frequent trip: {}",
        describe(&stats.popular_route, |m| with_count(m, String::clone, "trips"))
    )?;
    write_footer(out, stats.elapsed)
}

pub fn write_duration_stats(out: &mut impl Write, stats: &DurationStats) -> io::Result<()> {
    writeln!(out, "\nCalculating trip duration...\n")?;
    writeln!(
        out,
        "Total travel time: {}",
        describe(&stats.total_seconds, |s| format!(
            "{} seconds ({}) over {} trips",
            format_number(*s, 1),
            format_duration(*s),
            format_count(stats.trips)
        ))
    )?;
    writeln!(
        out,
        "Mean travel time: {}",
        describe(&stats.mean_seconds, |s| format!(
            "{} seconds ({})",
            format_number(*s, 1),
            format_duration(*s)
        ))
    )?;
    write_footer(out, stats.elapsed)
}

pub fn write_user_stats(out: &mut impl Write, stats: &UserStats) -> io::Result<()> {
    writeln!(out, "\nCalculating user stats...\n")?;
    write_breakdown(out, "Counts of user types", &stats.user_types)?;
    write_breakdown(out, "Counts of gender", &stats.genders)?;

    let year = |y: &i32| y.to_string();
    writeln!(
        out,
        "Earliest birth year: {}",
        describe(&stats.earliest_birth_year, year)
    )?;
    writeln!(
        out,
        "Most recent birth year: {}",
        describe(&stats.latest_birth_year, year)
    )?;
    writeln!(
        out,
        "Most common birth year: {}",
        describe(&stats.popular_birth_year, |m| with_count(m, year, "riders"))
    )?;
    write_footer(out, stats.elapsed)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
