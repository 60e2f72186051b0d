//! Since-last-read change tracker
//!
//! Accumulates signed quantity deltas per (entity, item) pair. A reader
//! consumes a delta with [`ChangeTracker::read_and_reset`], which zeroes it, so
//! each read reports only what changed since the previous read of that pair.
//! Keys are matched exactly; no case folding is applied.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    delta_by_key: HashMap<(String, String), i64>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: &str, item: &str, quantity: i64) {
        let delta = self.entry(entity, item);
        *delta = delta.saturating_add(quantity);
    }

    pub fn subtract(&mut self, entity: &str, item: &str, quantity: i64) {
        let delta = self.entry(entity, item);
        *delta = delta.saturating_sub(quantity);
    }

    /// Return the accumulated delta (0 if never touched) and zero it.
    pub fn read_and_reset(&mut self, entity: &str, item: &str) -> i64 {
        std::mem::take(self.entry(entity, item))
    }

    pub fn reset(&mut self) {
        self.delta_by_key.clear();
    }

    fn entry(&mut self, entity: &str, item: &str) -> &mut i64 {
        self.delta_by_key
            .entry((entity.to_string(), item.to_string()))
            .or_insert(0)
    }
}
