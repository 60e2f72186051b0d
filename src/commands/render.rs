use std::path::Path;

use anyhow::Result;
use gearplan::config::Config;
use gearplan::infrastructure::LocalFs;
use gearplan::EvaluateUseCase;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::check::{render_check_header, render_findings, render_summary};

/// `gearplan render`: write the HTML report. Plan problems end up in the
/// report and do not change the exit status.
pub fn cmd_render(plan: &Path, output: Option<&Path>, config: Config, ui: &UiContext) -> Result<()> {
    let stash = config.ledger.stash.clone();
    let report = EvaluateUseCase::new(LocalFs::new(), config).render(plan, output)?;

    if ui.json {
        crate::ui::json::emit(crate::ui::json::complete_event("render", &report))?;
    } else {
        print!(
            "{}",
            render_check_header(
                Icon::Render,
                "gearplan render",
                &plan.display().to_string(),
                &stash,
                ui.color,
                ui.unicode
            )
        );
        print!("{}", render_findings(&report, ui.verbose, ui.color, ui.unicode));
        print!("\n{}", render_summary(&report, ui.color, ui.unicode));
    }
    Ok(())
}
