use gearplan::application::WatchEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_watch_header(
    plan: &str,
    report: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "gearplan watch");
    header.add("Plan", plan);
    header.add("Report", report);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { plan, .. } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            plan
        ),
        WatchEvent::PlanChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::EvaluationStarted => format!(
            "{} {} Evaluating...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::EvaluationComplete {
            actions,
            errors,
            usage_errors,
            report,
            ..
        } => {
            let problems = errors + usage_errors;
            let icon = if problems > 0 {
                Icon::Warning
            } else {
                Icon::Success
            }
            .colored(supports_color, supports_unicode);

            if problems > 0 {
                format!(
                    "{} {} {} action(s), {} error(s), {} usage error(s) -> {}\n",
                    prefix, icon, actions, errors, usage_errors, report
                )
            } else {
                format!(
                    "{} {} {} action(s), no problems -> {}\n",
                    prefix, icon, actions, report
                )
            }
        }
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
