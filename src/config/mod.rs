//! Configuration module for gearplan
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GEARPLAN_*)
//! 3. Project config (`gearplan.toml` next to the plan)
//! 4. User config (~/.config/gearplan/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, LedgerConfig, OutputConfig, ReportConfig, Verbosity, WatchConfig,
};
