//! Presentation Layer
//!
//! Turns evaluation results into documents for people:
//! - `html` - the per-Action HTML report
//! - `escaping` - HTML escaping helpers

pub mod escaping;
pub mod html;

pub use html::{render_report, RenderedReport, ReportOptions};
