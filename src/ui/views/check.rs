use gearplan::application::EvaluateReport;
use gearplan::{Finding, FindingKind};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_header(
    icon: Icon,
    title: &str,
    plan: &str,
    stash: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(icon, title);
    header.add("Plan", plan);
    header.add("Stash", stash);
    header.render(supports_color, supports_unicode)
}

pub fn render_finding(finding: &Finding, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match finding.kind {
        FindingKind::Info => Icon::Note,
        FindingKind::Usage => Icon::Warning,
        _ => Icon::Error,
    };
    let text = match finding.kind {
        FindingKind::Info => ColoredText::dim(finding.to_string()),
        FindingKind::Usage => ColoredText::warning(finding.to_string()),
        _ => ColoredText::error(finding.to_string()),
    };
    format!(
        "  {} {}\n",
        icon.colored(supports_color, supports_unicode),
        text.render(supports_color)
    )
}

/// Findings, one per line. Info lines only at `-v` and above.
pub fn render_findings(
    report: &EvaluateReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    report
        .result
        .findings
        .iter()
        .filter(|f| verbose > 0 || f.is_error())
        .map(|f| render_finding(f, supports_color, supports_unicode))
        .collect()
}

pub fn render_summary(report: &EvaluateReport, supports_color: bool, supports_unicode: bool) -> String {
    let result = &report.result;
    let mut out = String::new();

    if let Some(path) = &report.report_path {
        out.push_str(&format!(
            "{} Report: {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            path.display()
        ));
    }

    if report.is_clean() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(format!("{} action(s), no problems", result.action_count))
                .render(supports_color)
        ));
    } else {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!(
                "{} action(s): {} error(s), {} usage error(s)",
                result.action_count,
                result.error_count(),
                result.usage_error_count()
            ))
            .bold()
            .render(supports_color)
        ));
    }
    out
}
