//! In-process slot.
//!
//! Clones share one underlying value, so a test can hand one handle to a
//! store and inspect (or corrupt) the slot through another.

use super::{EventSlot, SlotResult, DEFAULT_SLOT_KEY};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct MemorySlot {
    key: String,
    value: Rc<RefCell<Option<String>>>,
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_KEY)
    }
}

impl MemorySlot {
    /// Creates an empty slot.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Rc::new(RefCell::new(None)),
        }
    }

    /// Creates a slot pre-filled with raw text.
    pub fn with_raw(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let slot = Self::new(key);
        slot.set_raw(raw);
        slot
    }

    /// Current raw value, if any.
    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Replaces the raw value without going through the codec.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.value.borrow_mut() = Some(raw.into());
    }

    pub fn clear(&self) {
        *self.value.borrow_mut() = None;
    }
}

impl EventSlot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read_raw(&self) -> SlotResult<Option<String>> {
        Ok(self.raw())
    }

    fn write_raw(&self, value: &str) -> SlotResult<()> {
        self.set_raw(value);
        Ok(())
    }
}
