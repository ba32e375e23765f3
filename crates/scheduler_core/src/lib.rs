//! Core logic for the personal event scheduler.
//! This crate owns the event list, its durable slot, and the week/month view.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod slot;
pub mod store;
pub mod view;

pub use config::{default_log_level, ConfigOptions, SchedulerConfig};
pub use logging::{init_logging, logging_status};
pub use model::event::{long_date, parse_date, Event, EventDraft, EventId, EventValidationError};
pub use model::id::IdAllocator;
pub use slot::{
    EventSlot, JsonFileSlot, MemorySlot, SlotError, SlotResult, SqliteSlot, DEFAULT_SLOT_KEY,
};
pub use store::event_store::EventStore;
pub use store::{StoreError, StoreResult};
pub use view::filter::{filter_events, FilterMode, WeekStart};
pub use view::form::{EventForm, FormErrors};
pub use view::scheduler::{EditorState, Scheduler, SubmitError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
