//! Event id allocation.
//!
//! Ids are seeded from wall-clock epoch milliseconds, but two events created
//! within the same millisecond (or after a clock step backwards) must still
//! get distinct ids. The allocator therefore never hands out a value at or
//! below the highest id it has observed.

use crate::model::event::EventId;
use chrono::Utc;

/// Monotonic, time-seeded id allocator.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    highest_seen: EventId,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an id that already exists so it is never handed out again.
    pub fn observe(&mut self, id: EventId) {
        self.highest_seen = self.highest_seen.max(id);
    }

    /// Allocates the next id using the current wall clock.
    pub fn next_id(&mut self) -> Option<EventId> {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Allocates the next id for an explicit clock reading.
    ///
    /// Returns `max(now_ms, highest_seen + 1)`, or `None` once `highest_seen`
    /// is `EventId::MAX` and no unused id is left.
    pub fn next_id_at(&mut self, now_ms: i64) -> Option<EventId> {
        let floor = self.highest_seen.checked_add(1)?;
        let id = now_ms.max(floor).max(1);
        self.highest_seen = id;
        Some(id)
    }

    pub fn highest_seen(&self) -> EventId {
        self.highest_seen
    }
}

#[cfg(test)]
mod tests {
    use super::IdAllocator;

    #[test]
    fn same_millisecond_yields_distinct_ids() {
        let mut ids = IdAllocator::new();
        let first = ids.next_id_at(1_700_000_000_000);
        let second = ids.next_id_at(1_700_000_000_000);
        assert_eq!(first, Some(1_700_000_000_000));
        assert_eq!(second, Some(1_700_000_000_001));
    }

    #[test]
    fn clock_going_backwards_still_increases() {
        let mut ids = IdAllocator::new();
        ids.observe(500);
        assert_eq!(ids.next_id_at(100), Some(501));
    }

    #[test]
    fn never_returns_non_positive_ids() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id_at(-42), Some(1));
    }

    #[test]
    fn exhausted_id_space_yields_none_and_stays_exhausted() {
        let mut ids = IdAllocator::new();
        ids.observe(i64::MAX);
        assert_eq!(ids.next_id_at(1_700_000_000_000), None);
        assert_eq!(ids.next_id_at(i64::MAX), None);
        assert_eq!(ids.highest_seen(), i64::MAX);
    }
}
