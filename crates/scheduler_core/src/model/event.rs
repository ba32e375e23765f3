//! Event domain model.
//!
//! # Responsibility
//! - Define the `{id, title, date}` record stored in the durable slot.
//! - Validate titles and ids on construction and on deserialization.
//!
//! # Invariants
//! - `id` is stable for the event lifetime and never reused.
//! - `title` is non-empty after trimming.
//! - Decoding an invalid record fails instead of producing a partial event.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned when an event is created.
///
/// Values are seeded from epoch milliseconds, so they are always positive.
pub type EventId = i64;

/// Wire and storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation failure for event fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
    /// Id is zero or negative.
    InvalidId(EventId),
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title must not be empty"),
            Self::InvalidId(id) => write!(f, "event id must be positive, got {id}"),
        }
    }
}

impl Error for EventValidationError {}

/// Title/date pair accepted by create and update paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }

    /// Checks the draft against event field invariants.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// A single calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
}

/// Unvalidated shape used only while decoding.
#[derive(Deserialize)]
struct EventRecord {
    id: EventId,
    title: String,
    date: NaiveDate,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventValidationError;

    fn try_from(value: EventRecord) -> Result<Self, Self::Error> {
        let event = Event {
            id: value.id,
            title: value.title,
            date: value.date,
        };
        event.validate()?;
        Ok(event)
    }
}

impl Event {
    /// Builds an event from an allocated id and a draft.
    ///
    /// # Errors
    /// - `InvalidId` when `id <= 0`.
    /// - `EmptyTitle` when the draft title is blank.
    pub fn from_draft(id: EventId, draft: EventDraft) -> Result<Self, EventValidationError> {
        let event = Self {
            id,
            title: draft.title,
            date: draft.date,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id <= 0 {
            return Err(EventValidationError::InvalidId(self.id));
        }
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Replaces title and date while keeping the id.
    pub fn apply(&mut self, draft: EventDraft) {
        self.title = draft.title;
        self.date = draft.date;
    }

    /// Returns the date in `YYYY-MM-DD` form.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Returns the long display form, e.g. `March 10th, 2024`.
    pub fn display_date(&self) -> String {
        long_date(self.date)
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Formats a date as `Month Dayth, Year`.
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
