//! Subcommand implementations

pub mod check;
pub mod render;
pub mod watch;

use std::path::Path;

use anyhow::{Context, Result};
use gearplan::config::Config;
use tracing::warn;

/// Resolve config for a plan: `--config` file or the usual hierarchy, then
/// the `--stash` flag on top.
pub fn load_config(plan: &Path, explicit: Option<&Path>, stash: Option<&str>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for warning in &warnings {
                warn!("{}", warning);
            }
            config.with_env_overrides()
        }
        None => Config::load_or_default(plan.parent()),
    };

    if let Some(stash) = stash.filter(|s| !s.trim().is_empty()) {
        config.ledger.stash = stash.to_string();
    }
    Ok(config)
}
