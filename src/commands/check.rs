use std::path::Path;

use anyhow::Result;
use gearplan::config::Config;
use gearplan::infrastructure::LocalFs;
use gearplan::EvaluateUseCase;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::check::{render_check_header, render_findings, render_summary};

/// `gearplan check`: evaluate and list findings; exits 1 when the plan has problems.
pub fn cmd_check(plan: &Path, config: Config, ui: &UiContext) -> Result<()> {
    let stash = config.ledger.stash.clone();
    let report = EvaluateUseCase::new(LocalFs::new(), config).check(plan)?;

    if ui.json {
        crate::ui::json::emit(crate::ui::json::complete_event("check", &report))?;
    } else {
        print!(
            "{}",
            render_check_header(
                Icon::Check,
                "gearplan check",
                &plan.display().to_string(),
                &stash,
                ui.color,
                ui.unicode
            )
        );
        print!("{}", render_findings(&report, ui.verbose, ui.color, ui.unicode));
        print!("\n{}", render_summary(&report, ui.color, ui.unicode));
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
