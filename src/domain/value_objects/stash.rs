//! Stash identity value object
//!
//! The stash is the always-reachable, unlimited supply/sink of a plan. It is
//! exempt from location matching and from deficit flagging. Its name is a
//! configuration value rather than a constant so plans can use their own
//! naming convention.

use std::fmt;

/// Name used for the stash when nothing else is configured
pub const DEFAULT_STASH: &str = "GearStash";

/// Compare two location or entity names ignoring case.
pub fn same_place(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// The designated stash identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashIdentity(String);

impl StashIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// True when `name` (an entity name or a location) refers to the stash.
    pub fn matches(&self, name: &str) -> bool {
        same_place(&self.0, name)
    }
}

impl Default for StashIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_STASH)
    }
}

impl fmt::Display for StashIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StashIdentity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
