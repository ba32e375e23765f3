//! Slot-backed event store.
//!
//! Mutations are staged on a copy of the list, saved, then committed, so a
//! failed save never leaves memory ahead of the slot.

use super::{StoreError, StoreResult};
use crate::model::event::{Event, EventDraft, EventId};
use crate::model::id::IdAllocator;
use crate::slot::EventSlot;
use log::{info, warn};

pub struct EventStore<S: EventSlot> {
    slot: S,
    events: Vec<Event>,
    ids: IdAllocator,
}

impl<S: EventSlot> EventStore<S> {
    /// Opens a store and rehydrates it from `slot`.
    ///
    /// Absent or unreadable slot content yields an empty store; the failure
    /// is logged and never returned.
    pub fn open(slot: S) -> Self {
        let events = match slot.load() {
            Ok(events) => {
                info!(
                    "event=store_open module=store status=ok key={} count={}",
                    slot.key(),
                    events.len()
                );
                events
            }
            Err(err) => {
                warn!(
                    "event=store_open module=store status=recovered key={} error_code=slot_read_failed error={}",
                    slot.key(),
                    err
                );
                Vec::new()
            }
        };

        let mut ids = IdAllocator::new();
        for event in &events {
            ids.observe(event.id);
        }

        Self { slot, events, ids }
    }

    /// Returns every event currently held.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Creates an event with a freshly allocated id.
    ///
    /// # Errors
    /// - `Validation` when the draft title is blank.
    /// - `IdsExhausted` when an existing id is already `EventId::MAX`.
    /// - `Persistence` when the slot write fails.
    pub fn add(&mut self, draft: EventDraft) -> StoreResult<Event> {
        draft.validate()?;
        let mut ids = self.ids.clone();
        let id = ids.next_id().ok_or(StoreError::IdsExhausted)?;
        let event = Event::from_draft(id, draft)?;
        self.add_with_allocator(event, ids)
    }

    /// Creates an event using an explicit clock reading for id allocation.
    pub fn add_at(&mut self, draft: EventDraft, now_ms: i64) -> StoreResult<Event> {
        draft.validate()?;
        let mut ids = self.ids.clone();
        let id = ids.next_id_at(now_ms).ok_or(StoreError::IdsExhausted)?;
        let event = Event::from_draft(id, draft)?;
        self.add_with_allocator(event, ids)
    }

    fn add_with_allocator(&mut self, event: Event, ids: IdAllocator) -> StoreResult<Event> {
        let mut next = self.events.clone();
        next.push(event.clone());
        self.commit(next, "event_add", event.id)?;
        self.ids = ids;
        Ok(event)
    }

    /// Replaces title and date of an existing event, keeping its id.
    ///
    /// # Errors
    /// - `NotFound` when no event has `id`; nothing is persisted.
    /// - `Validation` when the draft title is blank.
    pub fn update(&mut self, id: EventId, draft: EventDraft) -> StoreResult<Event> {
        draft.validate()?;
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut next = self.events.clone();
        next[index].apply(draft);
        let updated = next[index].clone();
        self.commit(next, "event_update", id)?;
        Ok(updated)
    }

    /// Removes the event with `id` if present.
    ///
    /// Deleting an unknown id is a no-op that still re-persists the list.
    pub fn delete(&mut self, id: EventId) -> StoreResult<()> {
        let next: Vec<Event> = self
            .events
            .iter()
            .filter(|event| event.id != id)
            .cloned()
            .collect();
        self.commit(next, "event_delete", id)
    }

    fn commit(&mut self, next: Vec<Event>, action: &str, id: EventId) -> StoreResult<()> {
        if let Err(err) = self.slot.save(&next) {
            warn!(
                "event={action} module=store status=error key={} id={id} error_code=slot_write_failed error={err}",
                self.slot.key()
            );
            return Err(err.into());
        }
        info!(
            "event={action} module=store status=ok key={} id={id} count={}",
            self.slot.key(),
            next.len()
        );
        self.events = next;
        Ok(())
    }
}
