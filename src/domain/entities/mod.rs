//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Plan` - The decoded plan document (actions, transfers, asserts)
//! - `LedgerEntity` - A participant with a location and per-item quantities
//! - `EntityRegistry` - All participants of one evaluation, first-seen order
//! - `ItemCatalog` - All items of one evaluation, first-seen order

mod item_catalog;
mod ledger_entity;
mod plan;
mod registry;

pub use item_catalog::ItemCatalog;
pub use ledger_entity::LedgerEntity;
pub use plan::{Action, GearTransfer, LocationChange, Plan, PossessionAssert};
pub use registry::EntityRegistry;
