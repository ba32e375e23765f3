//! JSON wire format for the event list.
//!
//! The slot value is a JSON array of `{"id", "title", "date"}` records with
//! dates as `YYYY-MM-DD`. A payload is accepted only as a whole: one bad
//! record or a repeated id rejects the entire list.

use super::{SlotError, SlotResult};
use crate::model::event::Event;
use std::collections::HashSet;

/// Serializes the full event list.
pub fn encode_events(events: &[Event]) -> SlotResult<String> {
    serde_json::to_string(events).map_err(SlotError::Encode)
}

/// Parses a full event list, rejecting invalid records and duplicate ids.
pub fn decode_events(raw: &str) -> SlotResult<Vec<Event>> {
    let events: Vec<Event> =
        serde_json::from_str(raw).map_err(|err| SlotError::Malformed(err.to_string()))?;

    let mut seen = HashSet::with_capacity(events.len());
    for event in &events {
        if !seen.insert(event.id) {
            return Err(SlotError::Malformed(format!(
                "duplicate event id {}",
                event.id
            )));
        }
    }

    Ok(events)
}
