//! Watch event types and options

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::Config;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Plan document to watch and re-render
    pub plan: PathBuf,
    /// Report destination; defaults to `<plan><suffix>`
    pub output: Option<PathBuf>,
    pub config: Config,
    /// Stash name given on the command line, re-applied after config reloads
    pub stash_override: Option<String>,
    /// Reload `gearplan.toml` next to the plan when it changes
    pub reload_project_config: bool,
}

impl WatchOptions {
    pub fn new(plan: PathBuf) -> Self {
        Self {
            plan,
            output: None,
            config: Config::default(),
            stash_override: None,
            reload_project_config: true,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_stash_override(mut self, stash: Option<String>) -> Self {
        self.stash_override = stash;
        self
    }

    pub fn with_reload_project_config(mut self, reload: bool) -> Self {
        self.reload_project_config = reload;
        self
    }

    /// Directory holding the plan (and its project config)
    pub fn plan_dir(&self) -> &Path {
        match self.plan.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.config.watch.debounce_ms)
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted { plan: String, report: String },
    /// Plan or project config content changed
    PlanChanged { path: String },
    EvaluationStarted,
    EvaluationComplete {
        actions: usize,
        findings: usize,
        errors: usize,
        usage_errors: usize,
        report: String,
    },
    Error { message: String },
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Watcher state for debouncing
#[derive(Debug)]
pub struct WatcherState {
    debounce: Duration,
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending_changes: HashSet::new(),
            last_change: None,
        }
    }

    /// Record a change; restarts the quiet period
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_sync(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= self.debounce,
            None => false,
        }
    }

    /// Take all pending changes, resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }
}
