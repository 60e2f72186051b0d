//! Watch Use Case implementation

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use crate::application::evaluate::{report_path_for, EvaluateUseCase};
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::domain::ports::FileSystem;
use crate::error::{GearplanError, GearplanResult};
use crate::infrastructure::fs::LocalFs;

use super::event::{WatchEvent, WatchOptions, WatcherState};

/// Events arriving this soon after the watcher is registered are dropped
const STARTUP_COOLDOWN: Duration = Duration::from_millis(500);

/// Watch Use Case
///
/// Re-renders the plan report whenever the plan (or its project config)
/// changes on disk. Entry point for `gearplan watch`.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Start watching (blocking)
    ///
    /// Blocks until `running` is cleared. Evaluation failures are reported
    /// through `on_event` and never end the loop; only failing to set up the
    /// watcher returns an error.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> GearplanResult<()>
    where
        F: Fn(WatchEvent),
    {
        let dir = self.options.plan_dir();
        let dir = dir.canonicalize().map_err(|e| GearplanError::Watch {
            message: format!("cannot watch {}: {}", dir.display(), e),
        })?;
        let file_name = self
            .options
            .plan
            .file_name()
            .ok_or_else(|| GearplanError::Watch {
                message: format!("{} is not a file", self.options.plan.display()),
            })?;
        let plan_path = dir.join(file_name);
        let config_path = dir.join(PROJECT_CONFIG_FILE);

        let mut config = self.options.config.clone();

        on_event(WatchEvent::WatchStarted {
            plan: self.options.plan.display().to_string(),
            report: self.report_path(&config).display().to_string(),
        });

        // Seed hashes so the first editor touch without changes is ignored
        let fs = LocalFs::new();
        let mut content_hashes: HashMap<PathBuf, String> = HashMap::new();
        for path in [&plan_path, &config_path] {
            if let Ok(hash) = fs.hash(path) {
                content_hashes.insert(path.clone(), hash);
            }
        }

        self.evaluate(&config, &on_event);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            notify::Config::default(),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!(dir = %dir.display(), "watcher registered");

        let mut state = WatcherState::new(self.options.debounce());

        // notify sometimes replays events for existing files on registration
        let cooldown_end = Instant::now() + STARTUP_COOLDOWN;
        while running.load(Ordering::SeqCst) && Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                let path = normalize(path);
                let relevant = path == plan_path
                    || (self.options.reload_project_config && path == config_path);

                if relevant {
                    // Unreadable mid-save; the next event will carry the content
                    if let Ok(hash) = fs.hash(&path) {
                        if content_hashes.get(&path) != Some(&hash) {
                            content_hashes.insert(path.clone(), hash);
                            state.add_change(path);
                        }
                    }
                }
            }

            if state.should_sync() {
                let changes = state.take_changes();
                for path in &changes {
                    on_event(WatchEvent::PlanChanged {
                        path: path.display().to_string(),
                    });
                }

                if changes.contains(&config_path) {
                    match self.reload_config(&config_path) {
                        Ok(reloaded) => config = reloaded,
                        Err(e) => on_event(WatchEvent::Error {
                            message: e.to_string(),
                        }),
                    }
                }

                self.evaluate(&config, &on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn report_path(&self, config: &Config) -> PathBuf {
        self.options
            .output
            .clone()
            .unwrap_or_else(|| report_path_for(&self.options.plan, &config.report.suffix))
    }

    fn evaluate(&self, config: &Config, on_event: &impl Fn(WatchEvent)) {
        on_event(WatchEvent::EvaluationStarted);

        let use_case = EvaluateUseCase::new(LocalFs::new(), config.clone());
        match use_case.render(&self.options.plan, self.options.output.as_deref()) {
            Ok(report) => {
                let result = &report.result;
                on_event(WatchEvent::EvaluationComplete {
                    actions: result.action_count,
                    findings: result.findings.len(),
                    errors: result.error_count(),
                    usage_errors: result.usage_error_count(),
                    report: report
                        .report_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                });
            }
            Err(e) => {
                warn!("evaluation failed: {}", e);
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }

    fn reload_config(&self, path: &Path) -> GearplanResult<Config> {
        let mut config = if path.exists() {
            let (config, warnings) = Config::load_with_warnings(path)?;
            for warning in &warnings {
                warn!("{}", warning);
            }
            config.with_env_overrides()
        } else {
            Config::load_or_default(None)
        };

        if let Some(stash) = &self.options.stash_override {
            config.ledger.stash = stash.clone();
        }
        Ok(config)
    }
}

/// Resolve the parent directory so event paths compare equal to ours
fn normalize(path: PathBuf) -> PathBuf {
    let resolved = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => parent.canonicalize().ok().map(|p| p.join(name)),
        _ => None,
    };
    resolved.unwrap_or(path)
}
