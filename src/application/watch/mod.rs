//! Watch Use Case
//!
//! Keeps the HTML report in step with the plan document:
//! - File system monitoring (via `notify` crate)
//! - Content-hash filtering of editor noise
//! - Debouncing (configurable, 500ms default)
//! - Re-render through `EvaluateUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(plan).with_config(config);
//! let use_case = WatchUseCase::new(options);
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;


pub use event::{WatchEvent, WatchOptions, WatcherState};
pub use use_case::WatchUseCase;
