//! YAML plan decoder

use std::path::Path;

use crate::domain::entities::Plan;
use crate::domain::ports::PlanDecoder;
use crate::error::{GearplanError, GearplanResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlPlanDecoder;

impl PlanDecoder for YamlPlanDecoder {
    fn format(&self) -> &'static str {
        "yaml"
    }

    fn decode(&self, content: &str, origin: &Path) -> GearplanResult<Plan> {
        // An empty document is an empty plan rather than a decode error.
        if content.trim().is_empty() {
            return Ok(Plan::default());
        }
        serde_yaml_ng::from_str(content).map_err(|e| GearplanError::PlanDecode {
            file: origin.to_path_buf(),
            message: e.to_string(),
        })
    }
}
