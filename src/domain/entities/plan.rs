//! Plan document model
//!
//! A [`Plan`] is the already-decoded form of a plan document: an ordered list
//! of [`Action`]s, each carrying optional location changes, gear transfers and
//! possession asserts. Decoders accept both the snake_case field names used by
//! this crate and the PascalCase names of older plan files. Missing or `null`
//! lists decode as empty.

use serde::{Deserialize, Deserializer, Serialize};

/// Ordered sequence of actions; order is evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, alias = "Actions", deserialize_with = "null_as_default")]
    pub actions: Vec<Action>,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

/// One step of the plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default, alias = "Title", deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, alias = "LocationChanges", deserialize_with = "null_as_default")]
    pub location_changes: Vec<LocationChange>,

    #[serde(default, alias = "GearTransfers", deserialize_with = "null_as_default")]
    pub gear_transfers: Vec<GearTransfer>,

    #[serde(
        default,
        alias = "PossessionAsserts",
        alias = "AssertPossessions",
        deserialize_with = "null_as_default"
    )]
    pub possession_asserts: Vec<PossessionAssert>,
}

impl Action {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_location_change(
        mut self,
        entity: impl Into<String>,
        new_location: impl Into<String>,
    ) -> Self {
        self.location_changes.push(LocationChange {
            entity: entity.into(),
            new_location: new_location.into(),
        });
        self
    }

    pub fn with_transfer(mut self, transfer: GearTransfer) -> Self {
        self.gear_transfers.push(transfer);
        self
    }

    pub fn with_assert(
        mut self,
        entity: impl Into<String>,
        gear_item: impl Into<String>,
        quantity: i64,
    ) -> Self {
        self.possession_asserts.push(PossessionAssert {
            entity: entity.into(),
            gear_item: gear_item.into(),
            quantity,
        });
        self
    }
}

/// Move an entity to a new location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationChange {
    #[serde(default, alias = "Entity", deserialize_with = "null_as_default")]
    pub entity: String,

    #[serde(
        default,
        alias = "NewLocation",
        alias = "location",
        deserialize_with = "null_as_default"
    )]
    pub new_location: String,
}

/// Directed movement of one item between two entities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearTransfer {
    #[serde(
        default,
        alias = "FromEntity",
        alias = "from",
        deserialize_with = "null_as_default"
    )]
    pub from_entity: String,

    #[serde(
        default,
        alias = "ToEntity",
        alias = "to",
        deserialize_with = "null_as_default"
    )]
    pub to_entity: String,

    #[serde(
        default,
        alias = "GearItem",
        alias = "item",
        deserialize_with = "null_as_default"
    )]
    pub gear_item: String,

    #[serde(default, alias = "Quantity")]
    pub quantity: i64,

    #[serde(default, alias = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GearTransfer {
    pub fn new(
        from_entity: impl Into<String>,
        to_entity: impl Into<String>,
        gear_item: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            from_entity: from_entity.into(),
            to_entity: to_entity.into(),
            gear_item: gear_item.into(),
            quantity,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description, if present and not blank
    pub fn note(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Requirement that an entity holds at least `quantity` of an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossessionAssert {
    #[serde(default, alias = "Entity", deserialize_with = "null_as_default")]
    pub entity: String,

    #[serde(
        default,
        alias = "GearItem",
        alias = "item",
        deserialize_with = "null_as_default"
    )]
    pub gear_item: String,

    #[serde(default, alias = "Quantity")]
    pub quantity: i64,
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_snake_case_plan() {
        let json = r#"{
            "actions": [{
                "title": "Walk in",
                "location_changes": [{"entity": "Alice", "new_location": "Camp1"}],
                "gear_transfers": [{
                    "from_entity": "GearStash",
                    "to_entity": "Alice",
                    "gear_item": "Rope",
                    "quantity": 2,
                    "description": "lead rope"
                }],
                "possession_asserts": [{"entity": "Alice", "gear_item": "Rope", "quantity": 2}]
            }]
        }"#;

        let plan: Plan = serde_json::from_str(json).unwrap();
        let action = &plan.actions[0];
        assert_eq!(action.title, "Walk in");
        assert_eq!(action.location_changes[0].new_location, "Camp1");
        assert_eq!(action.gear_transfers[0].quantity, 2);
        assert_eq!(action.gear_transfers[0].note(), Some("lead rope"));
        assert_eq!(action.possession_asserts[0].quantity, 2);
    }

    #[test]
    fn decodes_pascal_case_plan() {
        let json = r#"{
            "Actions": [{
                "Title": "Pack",
                "GearTransfers": [{
                    "FromEntity": "GearStash",
                    "ToEntity": "Bob",
                    "GearItem": "Cam",
                    "Quantity": 6
                }]
            }]
        }"#;

        let plan: Plan = serde_json::from_str(json).unwrap();
        let transfer = &plan.actions[0].gear_transfers[0];
        assert_eq!(transfer.from_entity, "GearStash");
        assert_eq!(transfer.to_entity, "Bob");
        assert_eq!(transfer.gear_item, "Cam");
        assert_eq!(transfer.quantity, 6);
        assert!(transfer.description.is_none());
    }

    #[test]
    fn missing_and_null_lists_are_empty() {
        let json = r#"{"actions": [
            {"title": "Rest"},
            {"title": "Wait", "gear_transfers": null, "location_changes": null}
        ]}"#;

        let plan: Plan = serde_json::from_str(json).unwrap();
        for action in &plan.actions {
            assert!(action.location_changes.is_empty());
            assert!(action.gear_transfers.is_empty());
            assert!(action.possession_asserts.is_empty());
        }
    }

    #[test]
    fn null_names_decode_as_blank() {
        let json = r#"{"actions": [{"gear_transfers": [
            {"from_entity": null, "to_entity": "Bob", "gear_item": "Rope", "quantity": 1}
        ]}]}"#;

        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.actions[0].gear_transfers[0].from_entity, "");
    }

    #[test]
    fn blank_description_has_no_note() {
        let transfer = GearTransfer::new("A", "B", "Rope", 1).with_description("   ");
        assert_eq!(transfer.note(), None);
    }

    #[test]
    fn builder_assembles_action() {
        let action = Action::new("Approach")
            .with_location_change("Alice", "Hut")
            .with_transfer(GearTransfer::new("GearStash", "Alice", "Rope", 1))
            .with_assert("Alice", "Rope", 1);

        assert_eq!(action.location_changes.len(), 1);
        assert_eq!(action.gear_transfers.len(), 1);
        assert_eq!(action.possession_asserts.len(), 1);
    }
}
