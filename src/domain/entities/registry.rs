//! Entity registry
//!
//! Name → [`LedgerEntity`] mapping that remembers first-seen order, so report
//! columns stay stable between runs of the same plan. Entities are created
//! lazily through [`EntityRegistry::get_or_insert`].

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use super::LedgerEntity;
use crate::domain::value_objects::GearItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    entities: Vec<LedgerEntity>,
    index_by_name: HashMap<String, usize>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the entity called `name`, creating it (located at itself) on
    /// first mention.
    pub fn get_or_insert(&mut self, name: &str) -> &mut LedgerEntity {
        let index = match self.index_by_name.get(name) {
            Some(&index) => index,
            None => {
                let index = self.entities.len();
                self.entities.push(LedgerEntity::new(name));
                self.index_by_name.insert(name.to_string(), index);
                index
            }
        };
        &mut self.entities[index]
    }

    pub fn get(&self, name: &str) -> Option<&LedgerEntity> {
        self.index_by_name
            .get(name)
            .map(|&index| &self.entities[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_by_name.contains_key(name)
    }

    /// Quantity held by `name`; unknown entities hold nothing.
    pub fn quantity(&self, name: &str, item: &GearItem) -> i64 {
        self.get(name).map(|e| e.quantity(item)).unwrap_or(0)
    }

    /// Entities in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Serialize for EntityRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entities.iter())
    }
}
