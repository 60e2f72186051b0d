//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `EvaluateUseCase` - Load, decode and evaluate a plan; optionally write the report
//! - `WatchUseCase` - Re-render the report whenever the plan changes

pub mod evaluate;
pub mod watch;

pub use evaluate::{report_path_for, EvaluateReport, EvaluateUseCase};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase, WatcherState};
