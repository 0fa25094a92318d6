//! Per-slot pixel rect cache.
//!
//! The host view measures each slot marker after a layout pass and reports
//! the resulting pixel rect. Those rects live here, keyed by slot id, until
//! the next layout pass replaces them. The cache never decides hit-testing
//! policy itself; the board queries it in formation slot order.

use crate::pitch::geometry::Rect;

/// Measured pixel rects for slot markers, keyed by slot id.
///
/// Entries are stored in a small vec since boards never exceed eleven
/// slots. `set` replaces an existing entry in place.
#[derive(Debug, Clone, Default)]
pub struct SlotLayout {
    entries: Vec<(String, Rect)>,
}

impl SlotLayout {
    pub fn new() -> Self {
        SlotLayout { entries: Vec::new() }
    }

    /// Record the measured rect for a slot, replacing any earlier measurement.
    pub fn set(&mut self, slot_id: &str, rect: Rect) {
        match self.entries.iter_mut().find(|(id, _)| id == slot_id) {
            Some(entry) => entry.1 = rect,
            None => self.entries.push((slot_id.to_string(), rect)),
        }
    }

    /// Latest measured rect for a slot, if the host has reported one.
    pub fn rect(&self, slot_id: &str) -> Option<Rect> {
        self.entries.iter().find(|(id, _)| id == slot_id).map(|(_, rect)| *rect)
    }

    /// Drop entries whose slot id fails the predicate. Used when the slot
    /// set changes so stale rects cannot resolve against new slots.
    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.entries.retain(|(id, _)| keep(id));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
