//! gearplan - gear logistics checker for expedition plans
//!
//! A plan is an ordered list of Actions. Each Action moves people between
//! locations, passes gear between them and asserts who must be carrying what.
//! gearplan replays the plan against a ledger, reports every inconsistency
//! (gear passed between people who are not together, people running short,
//! failed possession requirements) and renders a per-Action HTML report.
//!
//! ```
//! use gearplan::domain::entities::{Action, GearTransfer, Plan};
//! use gearplan::domain::services::PlanEvaluator;
//!
//! let plan = Plan::new(vec![Action::new("Pack")
//!     .with_transfer(GearTransfer::new("GearStash", "Alice", "Rope", 2))
//!     .with_assert("Alice", "Rope", 2)]);
//!
//! let result = PlanEvaluator::default().evaluate(&plan);
//! assert!(result.is_clean());
//! assert_eq!(result.quantity("Alice", "Rope"), 2);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{EvaluateReport, EvaluateUseCase, WatchEvent, WatchOptions, WatchUseCase};
pub use config::Config;
pub use domain::entities::{Action, GearTransfer, LocationChange, Plan, PossessionAssert};
pub use domain::services::{EvaluationResult, PlanEvaluator};
pub use domain::value_objects::{Finding, FindingKind, GearItem, StashIdentity};
pub use error::{GearplanError, GearplanResult};
