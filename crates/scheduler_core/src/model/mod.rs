//! Domain model for scheduled events.
//!
//! # Responsibility
//! - Define the canonical event record persisted by the store.
//! - Own field-level invariants shared by every write path.
//!
//! # Invariants
//! - Every event carries a positive, stable `EventId`.
//! - Titles are never empty once an event exists.

pub mod event;
pub mod id;
