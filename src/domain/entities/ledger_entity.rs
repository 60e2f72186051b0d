//! Ledger entity
//!
//! One participant of a plan (a person, a cache, or the stash) with its
//! current location and a running quantity per item.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::GearItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntity {
    name: String,
    location: String,
    quantity_by_item: BTreeMap<GearItem, i64>,
}

impl LedgerEntity {
    /// A new entity starts out located at itself.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            location: name.clone(),
            name,
            quantity_by_item: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, new_location: impl Into<String>) {
        self.location = new_location.into();
    }

    /// Saturates at `i64::MAX`.
    pub fn assign_item(&mut self, item: &GearItem, quantity: i64) {
        let entry = self.entry(item);
        *entry = entry.saturating_add(quantity);
    }

    /// May drive the stored quantity negative. Saturates at `i64::MIN`.
    pub fn remove_item(&mut self, item: &GearItem, quantity: i64) {
        let entry = self.entry(item);
        *entry = entry.saturating_sub(quantity);
    }

    /// Current quantity; an item never touched reads as 0.
    pub fn quantity(&self, item: &GearItem) -> i64 {
        self.quantity_by_item.get(item).copied().unwrap_or(0)
    }

    pub fn quantities(&self) -> impl Iterator<Item = (&GearItem, i64)> {
        self.quantity_by_item.iter().map(|(item, qty)| (item, *qty))
    }

    fn entry(&mut self, item: &GearItem) -> &mut i64 {
        self.quantity_by_item.entry(item.clone()).or_insert(0)
    }
}
