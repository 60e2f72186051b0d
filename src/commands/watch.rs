use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use gearplan::application::{report_path_for, WatchEvent, WatchOptions, WatchUseCase};
use gearplan::config::Config;

use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(
    plan: &Path,
    output: Option<&Path>,
    config: Config,
    stash_override: Option<String>,
    explicit_config: bool,
    ui: &UiContext,
) -> Result<()> {
    let report = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| report_path_for(plan, &config.report.suffix));

    let options = WatchOptions::new(plan.to_path_buf())
        .with_config(config)
        .with_output(output.map(PathBuf::from))
        .with_stash_override(stash_override)
        .with_reload_project_config(!explicit_config);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &plan.display().to_string(),
                &report.display().to_string(),
                ui.color,
                ui.unicode
            )
        );
    }

    let json = ui.json;
    let (color, unicode) = (ui.color, ui.unicode);
    WatchUseCase::new(options).start(running, |event| {
        if json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, color, unicode);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
