//! Scheduler view: filtered projections and user intents over the store.
//!
//! # Responsibility
//! - Derive week/month projections as a pure function of list, mode and date.
//! - Validate form input and route submissions to add or update.
//!
//! # Invariants
//! - Filter state is never persisted; only the store writes the slot.
//! - The edit selection is an explicit value, not ambient state.

pub mod filter;
pub mod form;
pub mod scheduler;
