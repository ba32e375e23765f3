//! Week/month filtering relative to a reference date.

use crate::model::event::Event;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which slice of the calendar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    Week,
    #[default]
    Month,
}

impl FilterMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Message shown when the projection is empty.
    pub fn empty_message(self) -> String {
        format!("No events scheduled for this {}.", self.as_str())
    }
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

impl Display for WeekStart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized filter mode or week start text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionError {
    pub option: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl Display for ParseOptionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported {} `{}`; expected {}",
            self.option, self.value, self.expected
        )
    }
}

impl Error for ParseOptionError {}

impl FromStr for FilterMode {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(ParseOptionError {
                option: "filter mode",
                value: other.to_string(),
                expected: "week|month",
            }),
        }
    }
}

impl FromStr for WeekStart {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(ParseOptionError {
                option: "week start",
                value: other.to_string(),
                expected: "sunday|monday",
            }),
        }
    }
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - week_start.weekday().num_days_from_monday())
        % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Inclusive `(first, last)` days of the week containing `date`.
pub fn week_bounds(date: NaiveDate, week_start: WeekStart) -> (NaiveDate, NaiveDate) {
    let first = start_of_week(date, week_start);
    let last = first.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
    (first, last)
}

pub fn is_same_week(date: NaiveDate, today: NaiveDate, week_start: WeekStart) -> bool {
    start_of_week(date, week_start) == start_of_week(today, week_start)
}

pub fn is_same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Whether `date` falls in the `mode` window around `today`.
pub fn matches(mode: FilterMode, date: NaiveDate, today: NaiveDate, week_start: WeekStart) -> bool {
    match mode {
        FilterMode::Week => is_same_week(date, today, week_start),
        FilterMode::Month => is_same_month(date, today),
    }
}

/// Returns the events visible for `mode`, ordered by date then id.
pub fn filter_events(
    events: &[Event],
    mode: FilterMode,
    today: NaiveDate,
    week_start: WeekStart,
) -> Vec<Event> {
    let mut visible: Vec<Event> = events
        .iter()
        .filter(|event| matches(mode, event.date, today, week_start))
        .cloned()
        .collect();
    visible.sort_by_key(|event| (event.date, event.id));
    visible
}
