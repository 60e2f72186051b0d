//! JSON plan decoder

use std::path::Path;

use crate::domain::entities::Plan;
use crate::domain::ports::PlanDecoder;
use crate::error::{GearplanError, GearplanResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPlanDecoder;

impl PlanDecoder for JsonPlanDecoder {
    fn format(&self) -> &'static str {
        "json"
    }

    fn decode(&self, content: &str, origin: &Path) -> GearplanResult<Plan> {
        serde_json::from_str(content).map_err(|e| GearplanError::PlanDecode {
            file: origin.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plan() {
        let json = r#"{"actions": [{"title": "Pack", "gear_transfers": [
            {"from_entity": "GearStash", "to_entity": "Alice", "gear_item": "Rope", "quantity": 2}
        ]}]}"#;

        let plan = JsonPlanDecoder.decode(json, Path::new("plan.json")).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.actions[0].gear_transfers[0].gear_item, "Rope");
    }

    #[test]
    fn empty_object_is_empty_plan() {
        let plan = JsonPlanDecoder.decode("{}", Path::new("plan.json")).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn syntax_error_names_file_and_position() {
        let err = JsonPlanDecoder
            .decode("{\"actions\": [", Path::new("trip/plan.json"))
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("invalid plan in trip/plan.json"));
        assert!(message.contains("line 1"));
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let json = r#"{"actions": [{"gear_transfers": [{"quantity": 1.5}]}]}"#;
        assert!(JsonPlanDecoder.decode(json, Path::new("plan.json")).is_err());
    }
}
