//! Event store: the single owner of the canonical event list.
//!
//! # Responsibility
//! - Hold the in-memory list and mirror it to an injected `EventSlot`.
//! - Enforce id uniqueness and field validation on every write.
//!
//! # Invariants
//! - Every successful mutation persists the full list before returning.
//! - Failed mutations leave both memory and slot untouched.

use crate::model::event::{EventId, EventValidationError};
use crate::slot::SlotError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod event_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation failure.
#[derive(Debug)]
pub enum StoreError {
    Validation(EventValidationError),
    NotFound(EventId),
    /// No id above the highest stored one is left to allocate.
    IdsExhausted,
    Persistence(SlotError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "event not found: {id}"),
            Self::IdsExhausted => write!(f, "no unused event id is left to allocate"),
            Self::Persistence(err) => write!(f, "failed to persist events: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::IdsExhausted => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<EventValidationError> for StoreError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Persistence(value)
    }
}
