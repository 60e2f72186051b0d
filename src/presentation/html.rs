//! HTML report renderer
//!
//! Renders one section per Action: the title, the findings raised by that
//! Action, and an item × entity table of quantities with the change since the
//! previous Action. The table is built from inside the evaluation through an
//! [`ActionObserver`], so every cell delta is read exactly once per Action.

use chrono::{DateTime, Utc};

use crate::config::ReportConfig;
use crate::domain::entities::Plan;
use crate::domain::services::{
    ActionObserver, ActionOutcome, CellReading, EvaluationResult, LedgerCursor, PlanEvaluator,
};
use crate::domain::value_objects::{FindingKind, GearItem, StashIdentity};

use super::escaping::escape_html;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; margin: 0.5em 0 1.5em; }
th, td { border: 1px solid #ccc; padding: 0.2em 0.6em; text-align: right; }
th[scope=row] { text-align: left; }
td.total { font-weight: bold; }
td.deficit { background: #fdd; color: #900; }
.delta { font-size: 0.8em; }
.delta.up { color: #070; }
.delta.down { color: #a60; }
li.info { color: #555; }
li.error { color: #900; }
.summary.failed { color: #900; font-weight: bold; }
.generated { color: #888; font-size: 0.8em; }
";

/// Rendering switches
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    /// Item rows by name instead of first-seen order
    pub sort_items: bool,
    /// Include the stash as a column
    pub show_stash: bool,
    pub generated_at: DateTime<Utc>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

impl ReportOptions {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            title: config.title.clone(),
            sort_items: config.sort_items,
            show_stash: config.show_stash,
            generated_at: Utc::now(),
        }
    }
}

/// A rendered document together with the evaluation that produced it
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub html: String,
    pub result: EvaluationResult,
}

/// Evaluate `plan` and render the full HTML report.
pub fn render_report(
    plan: &Plan,
    evaluator: &PlanEvaluator,
    options: &ReportOptions,
) -> RenderedReport {
    let mut writer = HtmlReportWriter::new(options, evaluator.stash());
    let result = evaluator.evaluate_with(plan, &mut writer);
    let html = writer.finish(&result);
    RenderedReport { html, result }
}

struct HtmlReportWriter<'a> {
    options: &'a ReportOptions,
    stash: &'a StashIdentity,
    body: String,
}

impl<'a> HtmlReportWriter<'a> {
    fn new(options: &'a ReportOptions, stash: &'a StashIdentity) -> Self {
        Self {
            options,
            stash,
            body: String::new(),
        }
    }

    fn write_table(&mut self, ledger: &mut LedgerCursor<'_>) {
        let items: Vec<GearItem> = if self.options.sort_items {
            ledger.catalog().sorted().into_iter().cloned().collect()
        } else {
            ledger.catalog().iter().cloned().collect()
        };
        if items.is_empty() {
            self.body.push_str("<p class=\"empty\">No gear tracked yet.</p>\n");
            return;
        }

        let columns: Vec<String> = ledger
            .registry()
            .iter()
            .map(|entity| entity.name())
            .filter(|name| self.options.show_stash || !self.stash.matches(name))
            .map(str::to_string)
            .collect();

        self.body.push_str("<table>\n<thead><tr><th>Item</th>");
        for column in &columns {
            self.body.push_str(&format!("<th>{}</th>", escape_html(column)));
        }
        self.body.push_str("<th>Total</th></tr></thead>\n<tbody>\n");

        for item in &items {
            self.body.push_str(&format!(
                "<tr><th scope=\"row\">{}</th>",
                escape_html(item.name())
            ));
            let mut total: i64 = 0;
            for column in &columns {
                let reading = ledger.read_cell(column, item);
                total = total.saturating_add(reading.quantity);
                self.body.push_str(&cell_html(reading));
            }
            self.body
                .push_str(&format!("<td class=\"total\">{}</td></tr>\n", total));
        }
        self.body.push_str("</tbody>\n</table>\n");
    }

    fn finish(self, result: &EvaluationResult) -> String {
        let title = escape_html(&self.options.title);
        let body = if result.action_count == 0 {
            "<p class=\"empty\">The plan has no actions.</p>\n".to_string()
        } else {
            self.body
        };
        let status = if result.is_clean() { "ok" } else { "failed" };

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
             <h1>{title}</h1>\n{body}<footer>\n\
             <p class=\"summary {status}\">{summary}</p>\n\
             <p class=\"generated\">Generated {generated}</p>\n\
             </footer>\n</body>\n</html>\n",
            summary = summary_line(result),
            generated = self.options.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }
}

impl ActionObserver for HtmlReportWriter<'_> {
    fn action_evaluated(&mut self, outcome: &ActionOutcome<'_>, ledger: &mut LedgerCursor<'_>) {
        let title = outcome.action.title.trim();
        let title = if title.is_empty() {
            format!("Action {}", outcome.index + 1)
        } else {
            title.to_string()
        };

        self.body.push_str(&format!(
            "<section class=\"action\">\n<h2><span class=\"step\">{}.</span> {}</h2>\n",
            outcome.index + 1,
            escape_html(&title)
        ));

        if !outcome.findings.is_empty() {
            self.body.push_str("<ul class=\"findings\">\n");
            for finding in outcome.findings {
                let line = match finding.kind {
                    FindingKind::Info => format!(
                        "<li class=\"info\">{}</li>\n",
                        escape_html(&finding.message)
                    ),
                    kind => format!(
                        "<li class=\"error\"><strong>{}:</strong> {}</li>\n",
                        kind.label(),
                        escape_html(&finding.message)
                    ),
                };
                self.body.push_str(&line);
            }
            self.body.push_str("</ul>\n");
        }

        self.write_table(ledger);
        self.body.push_str("</section>\n");
    }
}

fn cell_html(reading: CellReading) -> String {
    let class = if reading.quantity < 0 {
        " class=\"deficit\""
    } else {
        ""
    };
    match reading.delta {
        0 => format!("<td{}>{}</td>", class, reading.quantity),
        d if d > 0 => format!(
            "<td{}>{} <span class=\"delta up\">+{}</span></td>",
            class, reading.quantity, d
        ),
        d => format!(
            "<td{}>{} <span class=\"delta down\">{}</span></td>",
            class, reading.quantity, d
        ),
    }
}

fn summary_line(result: &EvaluationResult) -> String {
    let verdict = if result.is_clean() {
        "Plan is consistent."
    } else {
        "Plan has problems."
    };
    format!(
        "{} action(s), {} error(s), {} usage error(s). {}",
        result.action_count,
        result.error_count(),
        result.usage_error_count(),
        verdict
    )
}
