//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// PascalCase plan with one of each problem kind
pub const TRIP_JSON: &str = r#"{
  "Actions": [
    {
      "Title": "Pack at the car",
      "GearTransfers": [
        {"FromEntity": "GearStash", "ToEntity": "Alice", "GearItem": "Rope", "Quantity": 1, "Description": "lead rope"}
      ]
    },
    {
      "Title": "Split up",
      "LocationChanges": [
        {"Entity": "Alice", "NewLocation": "Camp1"},
        {"Entity": "Bob", "NewLocation": "Camp2"}
      ],
      "GearTransfers": [
        {"FromEntity": "Alice", "ToEntity": "Bob", "GearItem": "Rope", "Quantity": 1}
      ]
    },
    {
      "Title": "Regroup",
      "LocationChanges": [{"Entity": "Bob", "NewLocation": "Camp1"}],
      "GearTransfers": [
        {"FromEntity": "Alice", "ToEntity": "Bob", "GearItem": "Rope", "Quantity": 2}
      ],
      "PossessionAsserts": [
        {"Entity": "Bob", "GearItem": "Rope", "Quantity": 3}
      ]
    }
  ]
}"#;

/// A plan with no problems
pub const CLEAN_YAML: &str = r#"
actions:
  - title: Pack
    gear_transfers:
      - {from: GearStash, to: Alice, item: Stove, quantity: 1}
      - {from: GearStash, to: Bob, item: Tent, quantity: 1}
  - title: Walk in
    location_changes:
      - {entity: Alice, location: Hut}
      - {entity: Bob, location: Hut}
    possession_asserts:
      - {entity: Alice, item: Stove, quantity: 1}
"#;

pub fn write_plan(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// The `gearplan` binary, isolated from the caller's config and environment
pub fn gearplan(dir: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_gearplan"));
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("GEARPLAN_STASH")
        .env_remove("GEARPLAN_SORT_ITEMS")
        .env_remove("GEARPLAN_VERBOSITY")
        .env_remove("GEARPLAN_LOG")
        .env_remove("RUST_LOG")
        .args(["--color", "never"]);
    cmd
}
