//! Gear item value object
//!
//! An item is identified purely by its name. Two items with the same name are
//! the same item; comparison is case-sensitive.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A piece of gear tracked by the ledger (e.g. "Rope", "Quickdraw").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GearItem(String);

impl GearItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Item name as written in the plan
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GearItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GearItem {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GearItem {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for GearItem {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
