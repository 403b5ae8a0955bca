//! Interactive filter selection.

use std::io::{BufRead, Write};

use bikeshare_core::error::Result;
use bikeshare_core::models::{parse_weekday, City, Filter, FilterSelection, Month};
use tracing::{debug, info};

use crate::console::Console;
use crate::report_view::SEPARATOR;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

/// Ask for city, month and day in turn, re-prompting each until the answer
/// is one of the accepted options.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterSelection> {
    console.say(GREETING)?;

    let city_prompt = format!(
        "Please enter the city name ({}): ",
        City::ALL.map(|c| c.name()).join(", ")
    );
    let city = ask_until_valid(console, &city_prompt, "city name", City::from_name)?;

    let month = ask_until_valid(
        console,
        "Please enter the month name (january to june, or all): ",
        "month name",
        |answer| Filter::parse(answer, Month::from_name),
    )?;

    let day = ask_until_valid(
        console,
        "Please enter the day name (monday to sunday, or all): ",
        "day name",
        |answer| Filter::parse(answer, parse_weekday),
    )?;

    console.say(SEPARATOR)?;

    let selection = FilterSelection::new(city, month, day);
    info!("Filters selected: {}", selection);
    Ok(selection)
}

/// Prompt until `parse` accepts the normalised answer. There is no retry
/// limit; only a closed input stream ends the loop early.
pub fn ask_until_valid<R, W, T>(
    console: &mut Console<R, W>,
    prompt: &str,
    what: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(prompt)?;
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }
        debug!("Rejected {} {:?}", what, answer);
        console.say(&format!(
            "Sorry, I do not understand your input. Please enter a valid {}.",
            what
        ))?;
    }
}
