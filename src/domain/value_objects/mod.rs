//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod finding;
mod gear_item;
mod stash;

pub use finding::{Finding, FindingKind};
pub use gear_item::GearItem;
pub use stash::{same_place, StashIdentity, DEFAULT_STASH};
