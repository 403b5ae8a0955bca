//! The interactive session loop.
//!
//! [`App`] owns the dataset loader and the console. Each iteration collects
//! a filter selection, loads the matching trips, prints the four statistics
//! reports, pages through the raw rows and finally asks whether to start
//! over.

use std::io::{self, BufRead, Write};

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::FilteredTable;
use bikeshare_data::reader::DatasetLoader;
use bikeshare_data::reporters::{station_stats, time_stats, trip_duration_stats, user_stats};
use tracing::{error, info, warn};

use crate::console::Console;
use crate::input::collect_filters;
use crate::paginator::paginate;
use crate::report_view::{
    write_duration_stats, write_station_stats, write_table_summary, write_time_stats,
    write_user_stats,
};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

pub struct App<R, W> {
    loader: DatasetLoader,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(loader: DatasetLoader, console: Console<R, W>) -> Self {
        Self { loader, console }
    }

    /// Run iterations until the user declines to restart.
    ///
    /// A closed input stream ends the session normally. Any other console
    /// failure is returned to the caller.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        match self.session() {
            Err(BikeshareError::InputClosed) => {
                info!("Console input closed; ending session");
                Ok(())
            }
            other => other,
        }
    }

    /// Give back the console, e.g. to inspect captured output in tests.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn session(&mut self) -> Result<()> {
        let mut iteration = 1usize;
        loop {
            self.iteration()?;
            if !self.console.confirm(RESTART_PROMPT)? {
                info!("Session finished after {} iteration(s)", iteration);
                return Ok(());
            }
            iteration += 1;
            info!("Restarting session (iteration {})", iteration);
        }
    }

    fn iteration(&mut self) -> Result<()> {
        let selection = collect_filters(&mut self.console)?;

        let table = match self.loader.load_selection(&selection) {
            Ok(table) => table,
            Err(e) => {
                // Load failures skip straight to the restart prompt.
                error!("Failed to load {}: {}", selection.city, e);
                self.console.say(&e.to_string())?;
                return Ok(());
            }
        };

        self.report(&table)?;
        paginate(&mut self.console, &table)?;
        Ok(())
    }

    fn report(&mut self, table: &FilteredTable) -> Result<()> {
        let out = self.console.output();
        write_table_summary(out, table)?;

        render_report(out, "time", |o| write_time_stats(o, &time_stats(table)));
        render_report(out, "station", |o| {
            write_station_stats(o, &station_stats(table))
        });
        render_report(out, "trip duration", |o| {
            write_duration_stats(o, &trip_duration_stats(table))
        });
        render_report(out, "user", |o| write_user_stats(o, &user_stats(table)));

        out.flush()?;
        Ok(())
    }
}

/// Write one report, logging instead of propagating a failure so the
/// remaining reports still run.
fn render_report<W: Write>(
    out: &mut W,
    name: &str,
    render: impl FnOnce(&mut W) -> io::Result<()>,
) {
    if let Err(e) = render(out) {
        warn!("Failed to write {} report: {}", name, e);
    }
}
