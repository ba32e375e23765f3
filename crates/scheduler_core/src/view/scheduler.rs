//! Scheduler view state and user intents.
//!
//! # Responsibility
//! - Keep the active filter mode and project visible events from the store.
//! - Build editor state for add/edit and route submissions to the store.
//!
//! # Invariants
//! - Submission with a selection updates that id; without one it adds.
//! - A successful submission closes the editor and clears fields and selection.
//! - A failed submission leaves the editor untouched.

use crate::config::SchedulerConfig;
use crate::model::event::{Event, EventId};
use crate::slot::EventSlot;
use crate::store::event_store::EventStore;
use crate::store::{StoreError, StoreResult};
use crate::view::filter::{filter_events, FilterMode, WeekStart};
use crate::view::form::{EventForm, FormErrors};
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Add/edit dialog state owned by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub open: bool,
    pub form: EventForm,
    pub selection: Option<EventId>,
}

impl EditorState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn heading(&self) -> &'static str {
        if self.selection.is_some() {
            "Edit Event"
        } else {
            "Add Event"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.selection.is_some() {
            "Update"
        } else {
            "Save"
        }
    }

    /// Clears fields and selection, then closes the dialog.
    pub fn reset(&mut self) {
        self.form.clear();
        self.selection = None;
        self.open = false;
    }
}

/// Failure of a form submission.
#[derive(Debug)]
pub enum SubmitError {
    Invalid(FormErrors),
    Store(StoreError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "{errors}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<FormErrors> for SubmitError {
    fn from(value: FormErrors) -> Self {
        Self::Invalid(value)
    }
}

impl From<StoreError> for SubmitError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Filtered view over an event store.
pub struct Scheduler<S: EventSlot> {
    store: EventStore<S>,
    mode: FilterMode,
    week_start: WeekStart,
}

impl<S: EventSlot> Scheduler<S> {
    /// Creates a view with the default `month` mode and Sunday week start.
    pub fn new(store: EventStore<S>) -> Self {
        Self {
            store,
            mode: FilterMode::default(),
            week_start: WeekStart::default(),
        }
    }

    pub fn with_config(store: EventStore<S>, config: &SchedulerConfig) -> Self {
        Self {
            store,
            mode: config.default_mode,
            week_start: config.week_start,
        }
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn into_store(self) -> EventStore<S> {
        self.store
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        if self.mode != mode {
            debug!(
                "event=filter_switch module=view from={} to={}",
                self.mode, mode
            );
        }
        self.mode = mode;
    }

    /// Events visible in the current mode relative to `today`.
    pub fn visible_events(&self, today: NaiveDate) -> Vec<Event> {
        filter_events(self.store.list(), self.mode, today, self.week_start)
    }

    pub fn empty_message(&self) -> String {
        self.mode.empty_message()
    }

    /// Editor state for a new event: empty fields, no selection.
    pub fn open_add(&self) -> EditorState {
        EditorState {
            open: true,
            form: EventForm::default(),
            selection: None,
        }
    }

    /// Editor state pre-populated from event `id`, or `None` if it is gone.
    pub fn open_edit(&self, id: EventId) -> Option<EditorState> {
        self.store.get(id).map(|event| EditorState {
            open: true,
            form: EventForm::from_event(event),
            selection: Some(event.id),
        })
    }

    /// Validates `form` and adds or updates depending on `selection`.
    pub fn submit(
        &mut self,
        form: &EventForm,
        selection: Option<EventId>,
    ) -> Result<Event, SubmitError> {
        let draft = form.validate()?;
        let event = match selection {
            Some(id) => self.store.update(id, draft)?,
            None => self.store.add(draft)?,
        };
        Ok(event)
    }

    /// Submits the editor and resets it on success.
    pub fn submit_editor(&mut self, editor: &mut EditorState) -> Result<Event, SubmitError> {
        let event = self.submit(&editor.form, editor.selection)?;
        editor.reset();
        Ok(event)
    }

    pub fn delete(&mut self, id: EventId) -> StoreResult<()> {
        self.store.delete(id)
    }
}
