//! Item catalog
//!
//! Every item the plan mentions, in first-seen order. Construction order is
//! kept separate from display order; [`ItemCatalog::sorted`] exists for
//! renderers that want alphabetical rows.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::domain::value_objects::GearItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<GearItem>,
    seen: HashSet<GearItem>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the item was not known yet.
    pub fn register(&mut self, item: &GearItem) -> bool {
        if self.seen.contains(item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item.clone());
        true
    }

    pub fn contains(&self, item: &GearItem) -> bool {
        self.seen.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GearItem> {
        self.items.iter()
    }

    /// Items ordered by name, for display
    pub fn sorted(&self) -> Vec<&GearItem> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort();
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Serialize for ItemCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut catalog = ItemCatalog::new();
        assert!(catalog.register(&GearItem::new("Rope")));
        assert!(catalog.register(&GearItem::new("Cam")));
        assert!(!catalog.register(&GearItem::new("Rope")));

        let names: Vec<_> = catalog.iter().map(GearItem::name).collect();
        assert_eq!(names, vec!["Rope", "Cam"]);
    }

    #[test]
    fn sorted_does_not_change_construction_order() {
        let mut catalog = ItemCatalog::new();
        catalog.register(&GearItem::new("Rope"));
        catalog.register(&GearItem::new("Cam"));

        let sorted: Vec<_> = catalog.sorted().into_iter().map(GearItem::name).collect();
        assert_eq!(sorted, vec!["Cam", "Rope"]);
        assert_eq!(catalog.iter().next().unwrap().name(), "Rope");
    }

    #[test]
    fn serializes_as_names() {
        let mut catalog = ItemCatalog::new();
        catalog.register(&GearItem::new("Rope"));
        assert_eq!(serde_json::to_string(&catalog).unwrap(), r#"["Rope"]"#);
    }
}
