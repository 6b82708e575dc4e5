//! Human and JSON renderings of a conversion run.

use serde_json::{json, Value};
use snip_babel::{ConversionSummary, RuleOutcome, RuleSpec};
use std::fmt::Write;

/// One line per rule, followed by indented per-file failures and a total.
pub fn summary_text(summary: &ConversionSummary) -> String {
    let mut out = String::new();
    for rule in &summary.rules {
        match &rule.outcome {
            RuleOutcome::Converted(report) => {
                let _ = write!(out, "{}: {} written", rule.name, report.written.len());
                if !report.is_complete() {
                    let _ = write!(out, ", {} failed", report.failures.len());
                }
                out.push('\n');
                for failure in &report.failures {
                    let _ = writeln!(out, "  {}: {}", failure.trigger, failure.error);
                }
            }
            RuleOutcome::Skipped(err) => {
                let _ = writeln!(out, "{}: skipped ({err})", rule.name);
            }
            RuleOutcome::Failed(err) => {
                let _ = writeln!(out, "{}: failed ({err})", rule.name);
            }
        }
    }
    let _ = writeln!(
        out,
        "All conversion rules processed: {} file(s) written, {} file error(s), {} rule(s) with problems",
        summary.files_written(),
        summary.file_failures(),
        summary.problem_count()
    );
    out
}

pub fn summary_json(summary: &ConversionSummary) -> Value {
    let rules: Vec<Value> = summary
        .rules
        .iter()
        .map(|rule| match &rule.outcome {
            RuleOutcome::Converted(report) => json!({
                "name": rule.name,
                "status": "converted",
                "written": report
                    .written
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>(),
                "failures": report
                    .failures
                    .iter()
                    .map(|f| json!({ "trigger": f.trigger, "error": f.error.to_string() }))
                    .collect::<Vec<_>>(),
            }),
            RuleOutcome::Skipped(err) => json!({
                "name": rule.name,
                "status": "skipped",
                "error": err.to_string(),
            }),
            RuleOutcome::Failed(err) => json!({
                "name": rule.name,
                "status": "failed",
                "error": err.to_string(),
            }),
        })
        .collect();

    json!({
        "rules": rules,
        "files_written": summary.files_written(),
        "file_failures": summary.file_failures(),
        "rules_with_problems": summary.problem_count(),
    })
}

pub fn rules_text(specs: &[RuleSpec]) -> String {
    let mut out = String::new();
    for spec in specs {
        let _ = writeln!(
            out,
            "  {:<12} [{}] -> {}/ ({})",
            spec.name, spec.section, spec.folder, spec.scope
        );
    }
    out
}
