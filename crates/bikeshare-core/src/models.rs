use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case name as typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// CSV file holding this city's trips, relative to the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Look up a city by its lower-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Month ─────────────────────────────────────────────────────────────────────

/// The six months covered by the published datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar month number (January = 1).
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capitalised English name for a calendar month number, e.g. `3` → `"March"`.
///
/// Returns `None` outside `1..=12`.
pub fn month_display_name(number: u32) -> Option<&'static str> {
    let month = chrono::Month::try_from(u8::try_from(number).ok()?).ok()?;
    Some(month.name())
}

// ── Weekday helpers ───────────────────────────────────────────────────────────

/// Every weekday, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Capitalised English weekday name, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a full weekday name, ignoring case. Abbreviations are rejected.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .into_iter()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(name))
}

// ── Filter ────────────────────────────────────────────────────────────────────

/// A single filter axis: either every value, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    /// Sentinel accepted at the prompt meaning "no filtering".
    pub const ALL_KEYWORD: &'static str = "all";

    /// Returns `true` when `value` passes this filter.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }

    /// Parse `"all"` or a value recognised by `parse_value`.
    pub fn parse(input: &str, parse_value: impl Fn(&str) -> Option<T>) -> Option<Self> {
        if input == Self::ALL_KEYWORD {
            Some(Filter::All)
        } else {
            parse_value(input).map(Filter::Only)
        }
    }
}

impl fmt::Display for Filter<Month> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(month) => write!(f, "{}", month),
        }
    }
}

impl fmt::Display for Filter<Weekday> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(day) => f.write_str(&weekday_name(*day).to_lowercase()),
        }
    }
}

// ── FilterSelection ───────────────────────────────────────────────────────────

/// The `(city, month, day)` triple chosen at the start of a session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Filter<Month>,
    pub day: Filter<Weekday>,
}

impl FilterSelection {
    pub fn new(city: City, month: Filter<Month>, day: Filter<Weekday>) -> Self {
        Self { city, month, day }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city: {}, month: {}, day: {}",
            self.city, self.month, self.day
        )
    }
}

// ── Schema ────────────────────────────────────────────────────────────────────

/// Optional columns present in a city's CSV file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// A single trip row, with the calendar fields derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Zero-based position of the row in its source file.
    pub position: usize,
    pub start_time: NaiveDateTime,
    /// End time as written in the source file; only ever displayed.
    pub end_time: String,
    /// Trip duration in seconds. `None` when the cell is blank, as are the
    /// station, user type and demographic fields below.
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Calendar month of `start_time` (January = 1).
    pub month: u32,
    pub weekday: Weekday,
    /// Hour of day of `start_time`, `0..=23`.
    pub hour: u32,
}

impl TripRecord {
    /// Build a record, deriving month, weekday and hour from `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: usize,
        start_time: NaiveDateTime,
        end_time: String,
        trip_duration: Option<f64>,
        start_station: Option<String>,
        end_station: Option<String>,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            position,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    /// Combined `"<start> to <end>"` key identifying the route, present only
    /// when both stations are.
    pub fn route(&self) -> Option<String> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some(format!("{} to {}", start, end)),
            _ => None,
        }
    }
}

// ── FilteredTable ─────────────────────────────────────────────────────────────

/// The trips for one city that passed the month/day filters, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredTable {
    pub city: City,
    pub schema: Schema,
    /// Number of rows in the city's file before filtering.
    pub total_rows: usize,
    pub trips: Vec<TripRecord>,
}

impl FilteredTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Rows in `[start, start + count)`, clamped to the table length.
    pub fn window(&self, start: usize, count: usize) -> &[TripRecord] {
        let begin = start.min(self.trips.len());
        let end = start.saturating_add(count).min(self.trips.len());
        &self.trips[begin..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    // ── City ──────────────────────────────────────────────────────────────

    #[test]
    fn test_city_from_name() {
        assert_eq!(City::from_name("chicago"), Some(City::Chicago));
        assert_eq!(City::from_name("new york city"), Some(City::NewYorkCity));
        assert_eq!(City::from_name("washington"), Some(City::Washington));
        assert_eq!(City::from_name("boston"), None);
        // Names are matched after normalisation, not here.
        assert_eq!(City::from_name("Chicago"), None);
    }

    #[test]
    fn test_city_file_names() {
        assert_eq!(City::Chicago.file_name(), "chicago.csv");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
    }

    // ── Month ─────────────────────────────────────────────────────────────

    #[test]
    fn test_month_numbers_follow_enumeration_order() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.number(), i as u32 + 1);
        }
    }

    #[test]
    fn test_month_from_name_rejects_second_half_of_year() {
        assert_eq!(Month::from_name("june"), Some(Month::June));
        assert_eq!(Month::from_name("july"), None);
    }

    #[test]
    fn test_month_display_name() {
        assert_eq!(month_display_name(3), Some("March"));
        assert_eq!(month_display_name(12), Some("December"));
        assert_eq!(month_display_name(0), None);
        assert_eq!(month_display_name(13), None);
    }

    // ── Weekday ───────────────────────────────────────────────────────────

    #[test]
    fn test_parse_weekday_is_case_insensitive() {
        assert_eq!(parse_weekday("monday"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("SUNDAY"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("mon"), None);
    }

    // ── Filter ────────────────────────────────────────────────────────────

    #[test]
    fn test_filter_parse_all_sentinel() {
        assert_eq!(Filter::parse("all", Month::from_name), Some(Filter::All));
        assert_eq!(
            Filter::parse("march", Month::from_name),
            Some(Filter::Only(Month::March))
        );
        assert_eq!(Filter::parse("smarch", Month::from_name), None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(Filter::All.matches(&Weekday::Tue));
        assert!(Filter::Only(Weekday::Tue).matches(&Weekday::Tue));
        assert!(!Filter::Only(Weekday::Tue).matches(&Weekday::Wed));
    }

    #[test]
    fn test_filter_selection_display() {
        let selection = FilterSelection::new(
            City::NewYorkCity,
            Filter::Only(Month::April),
            Filter::Only(Weekday::Fri),
        );
        assert_eq!(
            selection.to_string(),
            "city: new york city, month: april, day: friday"
        );
    }

    // ── TripRecord ────────────────────────────────────────────────────────

    #[test]
    fn test_trip_record_derives_calendar_fields() {
        // 2017-03-07 was a Tuesday.
        let trip = TripRecord::new(
            4,
            at(2017, 3, 7, 17),
            "2017-03-07 17:30:00".to_string(),
            Some(900.0),
            Some("Canal St".to_string()),
            Some("Clark St".to_string()),
            Some("Subscriber".to_string()),
            None,
            None,
        );
        assert_eq!(trip.month, 3);
        assert_eq!(trip.weekday, Weekday::Tue);
        assert_eq!(trip.hour, 17);
        assert_eq!(trip.route().as_deref(), Some("Canal St to Clark St"));
    }

    #[test]
    fn test_route_needs_both_stations() {
        let trip = |from: Option<&str>, to: Option<&str>| {
            TripRecord::new(
                0,
                at(2017, 3, 7, 17),
                String::new(),
                Some(60.0),
                from.map(str::to_string),
                to.map(str::to_string),
                None,
                None,
                None,
            )
        };
        assert_eq!(trip(None, Some("Clark St")).route(), None);
        assert_eq!(trip(Some("Canal St"), None).route(), None);
        assert_eq!(trip(None, None).route(), None);
    }

    // ── FilteredTable ─────────────────────────────────────────────────────

    fn table_of(n: usize) -> FilteredTable {
        let trips = (0..n)
            .map(|i| {
                TripRecord::new(
                    i,
                    at(2017, 1, 2, 8),
                    String::new(),
                    Some(60.0),
                    Some("A".to_string()),
                    Some("B".to_string()),
                    None,
                    None,
                    None,
                )
            })
            .collect();
        FilteredTable {
            city: City::Chicago,
            schema: Schema::default(),
            total_rows: n,
            trips,
        }
    }

    #[test]
    fn test_window_clamps_to_table_end() {
        let table = table_of(12);
        assert_eq!(table.window(0, 5).len(), 5);
        assert_eq!(table.window(10, 5).len(), 2);
        assert_eq!(table.window(10, 5)[0].position, 10);
        assert!(table.window(15, 5).is_empty());
    }

    #[test]
    fn test_window_on_empty_table() {
        let table = table_of(0);
        assert!(table.is_empty());
        assert!(table.window(0, 5).is_empty());
    }
}
