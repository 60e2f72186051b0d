//! Plan decoders
//!
//! Concrete [`PlanDecoder`] implementations, selected by file extension.

mod json;
mod yaml;

use std::path::Path;

pub use json::JsonPlanDecoder;
pub use yaml::YamlPlanDecoder;

use crate::domain::ports::PlanDecoder;
use crate::error::{GearplanError, GearplanResult};

/// Pick a decoder from the plan file's extension (case-insensitive).
pub fn decoder_for_path(path: &Path) -> GearplanResult<Box<dyn PlanDecoder>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "json" => Ok(Box::new(JsonPlanDecoder)),
        "yaml" | "yml" => Ok(Box::new(YamlPlanDecoder)),
        _ => Err(GearplanError::UnsupportedPlanFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}
