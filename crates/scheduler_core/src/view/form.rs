//! Add/edit form input and field validation.

use crate::model::event::{parse_date, Event, EventDraft};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DATE_REQUIRED: &str = "Date is required";
pub const DATE_INVALID: &str = "Date must be a valid calendar date";

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    /// Expected as `YYYY-MM-DD`.
    pub date: String,
}

impl EventForm {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
        }
    }

    /// Pre-populates fields from an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date_string(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.date.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.date.is_empty()
    }

    /// Validates every field and returns a draft with a trimmed title.
    ///
    /// All field errors are collected, not just the first one.
    pub fn validate(&self) -> Result<EventDraft, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.title = Some(TITLE_REQUIRED);
        }

        let date = if self.date.trim().is_empty() {
            errors.date = Some(DATE_REQUIRED);
            None
        } else {
            let parsed = parse_date(&self.date);
            if parsed.is_none() {
                errors.date = Some(DATE_INVALID);
            }
            parsed
        };

        match date {
            Some(date) if errors.is_empty() => Ok(EventDraft::new(title, date)),
            _ => Err(errors),
        }
    }
}

/// Per-field validation messages, shown inline next to each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub date: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none()
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = [self.title, self.date].into_iter().flatten().collect();
        if messages.is_empty() {
            return f.write_str("form is valid");
        }
        f.write_str(&messages.join("; "))
    }
}

impl Error for FormErrors {}
