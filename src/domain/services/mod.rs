//! Domain Services
//!
//! Stateless services operating on domain entities.
//! - `ChangeTracker` - Since-last-read quantity deltas
//! - `PlanEvaluator` - Applies a plan to a fresh ledger and validates it

mod change_tracker;
mod evaluator;

pub use change_tracker::ChangeTracker;
pub use evaluator::{
    ActionObserver, ActionOutcome, CellReading, EvaluationResult, LedgerCursor, PlanEvaluator,
};
