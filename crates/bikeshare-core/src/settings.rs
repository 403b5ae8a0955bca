use clap::Parser;
use std::path::PathBuf;

use crate::error::{BikeshareError, Result};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Explore US bikeshare trip data interactively
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare",
    about = "Explore US bikeshare trip data interactively",
    version
)]
pub struct Settings {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and environment.
    ///
    /// Usage errors, `--help` and `--version` are handled by clap, which
    /// prints and exits.
    pub fn load() -> Result<Self> {
        Settings::parse().resolve()
    }

    /// Same as [`Settings::load`] but with an explicit argument list, so
    /// tests don't depend on the real command line.
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let settings = Settings::try_parse_from(args)
            .map_err(|e| BikeshareError::Config(e.to_string()))?;
        settings.resolve()
    }

    /// Apply the `--debug` override and sanity-check the data directory.
    fn resolve(mut self) -> Result<Self> {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }

        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(BikeshareError::Config(format!(
                "data directory {} is not a directory",
                self.data_dir.display()
            )));
        }

        Ok(self)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
