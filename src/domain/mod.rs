//! Domain Layer
//!
//! This is the core of gearplan - pure ledger logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Plan model, ledger entities, registry, item catalog
//! - `value_objects/` - Immutable value types (GearItem, StashIdentity, Finding)
//! - `services/` - ChangeTracker and PlanEvaluator
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Fresh state per evaluation** - Nothing survives between two evaluations
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
