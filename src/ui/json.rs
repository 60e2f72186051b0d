//! NDJSON output for `--json` mode: one JSON object per line on stdout.

use std::io::{self, Write};

use gearplan::application::EvaluateReport;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Final event of `check` and `render`
pub fn complete_event(command: &str, report: &EvaluateReport) -> serde_json::Value {
    let result = &report.result;
    serde_json::json!({
        "event": "complete",
        "command": command,
        "success": report.is_clean(),
        "plan": report.plan_path.display().to_string(),
        "report": report.report_path.as_ref().map(|p| p.display().to_string()),
        "actions": result.action_count,
        "errors": result.error_count(),
        "usage_errors": result.usage_error_count(),
        "findings": result.findings,
    })
}

pub fn error_event(command: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "command": command,
        "message": message,
    })
}
