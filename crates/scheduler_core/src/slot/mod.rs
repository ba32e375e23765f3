//! Durable key-value slots holding the serialized event list.
//!
//! # Responsibility
//! - Define the persistence seam the event store depends on.
//! - Share one JSON wire format across every backend.
//!
//! # Invariants
//! - A slot stores the full list under one key and is overwritten wholesale.
//! - An absent (or blank) slot loads as an empty list.
//! - Malformed content is reported as `SlotError::Malformed`, never masked.

use crate::db::DbError;
use crate::model::event::Event;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod codec;
pub mod file;
pub mod memory;
pub mod sqlite;

pub use codec::{decode_events, encode_events};
pub use file::JsonFileSlot;
pub use memory::MemorySlot;
pub use sqlite::SqliteSlot;

/// Slot key used when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "events";

pub type SlotResult<T> = Result<T, SlotError>;

/// Failure reading or writing a slot.
#[derive(Debug)]
pub enum SlotError {
    Io(std::io::Error),
    Db(DbError),
    Encode(serde_json::Error),
    Malformed(String),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "slot io error: {err}"),
            Self::Db(err) => write!(f, "slot database error: {err}"),
            Self::Encode(err) => write!(f, "failed to encode events: {err}"),
            Self::Malformed(message) => write!(f, "malformed slot content: {message}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Malformed(_) => None,
        }
    }
}

impl From<std::io::Error> for SlotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence backend for the event list.
///
/// Backends only move raw text; `load`/`save` apply the shared codec.
pub trait EventSlot {
    /// Name of the slot, used for diagnostics.
    fn key(&self) -> &str;

    /// Reads the raw slot value, `None` when the slot has never been written.
    fn read_raw(&self) -> SlotResult<Option<String>>;

    /// Overwrites the raw slot value.
    fn write_raw(&self, value: &str) -> SlotResult<()>;

    fn load(&self) -> SlotResult<Vec<Event>> {
        match self.read_raw()? {
            Some(raw) if !raw.trim().is_empty() => decode_events(&raw),
            _ => Ok(Vec::new()),
        }
    }

    fn save(&self, events: &[Event]) -> SlotResult<()> {
        let encoded = encode_events(events)?;
        self.write_raw(&encoded)
    }
}

impl<S: EventSlot + ?Sized> EventSlot for &S {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn read_raw(&self) -> SlotResult<Option<String>> {
        (**self).read_raw()
    }

    fn write_raw(&self, value: &str) -> SlotResult<()> {
        (**self).write_raw(value)
    }
}

impl<S: EventSlot + ?Sized> EventSlot for Box<S> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn read_raw(&self) -> SlotResult<Option<String>> {
        (**self).read_raw()
    }

    fn write_raw(&self, value: &str) -> SlotResult<()> {
        (**self).write_raw(value)
    }
}
