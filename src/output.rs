//! Output rendering for scan, push, and rules commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON forms are composed
//! by pure functions so they can be asserted in tests.

use crate::models::{Report, Severity};
use crate::push::PushOutcome;
use crate::rules::Rule;
use crate::utils::{note_prefix, use_colors};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn severity_tag(sev: Severity, color: bool) -> String {
    let tag = format!("⟦{}⟧", sev.as_str());
    if !color {
        return tag;
    }
    match sev {
        Severity::High => tag.red().bold().to_string(),
        Severity::Medium => tag.yellow().bold().to_string(),
        Severity::Low => tag.blue().bold().to_string(),
    }
}

fn severity_icon(sev: Severity, color: bool) -> String {
    let icon = match sev {
        Severity::High => "✖",
        Severity::Medium => "▲",
        Severity::Low => "◆",
    };
    if !color {
        return icon.to_string();
    }
    match sev {
        Severity::High => icon.red().to_string(),
        Severity::Medium => icon.yellow().to_string(),
        Severity::Low => icon.blue().to_string(),
    }
}

/// Print a scan report in the requested format.
pub fn print_report(report: &Report, files: usize, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_report_json(report, files))),
        _ => {
            let color = use_colors(output);
            for v in &report.violations {
                let file = if color {
                    v.file.clone().bold().to_string()
                } else {
                    v.file.clone()
                };
                println!(
                    "{} {} {} — {}",
                    severity_icon(v.severity, color),
                    severity_tag(v.severity, color),
                    file,
                    v.issue
                );
            }
            let summary = format!("— Summary — {} files={}", report.summary, files);
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print the issue draft produced for a push.
pub fn print_push(outcome: &PushOutcome, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_push_json(outcome))),
        _ => {
            let color = use_colors(output);
            let title = if color {
                outcome.issue.title.clone().bold().to_string()
            } else {
                outcome.issue.title.clone()
            };
            println!("{}", title);
            println!("labels: {}", outcome.issue.labels.join(", "));
            if !outcome.failed.is_empty() {
                let line = format!("skipped commits: {}", outcome.failed.join(", "));
                if color {
                    println!("{}", line.yellow());
                } else {
                    println!("{}", line);
                }
            }
            println!();
            print!("{}", outcome.issue.body);
        }
    }
}

/// Report a push that was not processed because its branch is not watched.
///
/// Human mode writes a note to stderr; JSON mode writes an object to stdout.
pub fn print_skipped<S: AsRef<str>>(git_ref: &str, branches: &[S], output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_skipped_json(git_ref, branches))),
        _ => {
            let watched: Vec<&str> = branches.iter().map(|b| b.as_ref()).collect();
            eprintln!(
                "{} Push to '{}' skipped; watched branches: {}",
                note_prefix(),
                git_ref,
                watched.join(", ")
            );
        }
    }
}

/// Print the rule catalog.
pub fn print_rules(rules: &[Rule], output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_rules_json(rules))),
        _ => {
            let color = use_colors(output);
            for (i, r) in rules.iter().enumerate() {
                println!(
                    "{:>2}. {} {} — {}",
                    i + 1,
                    severity_tag(r.severity, color),
                    r.id,
                    r.issue
                );
            }
        }
    }
}

fn to_pretty(v: &JsonVal) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

/// Compose scan JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report, files: usize) -> JsonVal {
    json!({
        "passed": report.passed,
        "summary": report.summary,
        "counts": report.counts,
        "files": files,
        "violations": report.violations,
    })
}

/// Compose push JSON object (pure) for testing/snapshot purposes.
pub fn compose_push_json(outcome: &PushOutcome) -> JsonVal {
    json!({
        "repository": format!("{}/{}", outcome.repo.owner, outcome.repo.name),
        "title": outcome.issue.title,
        "body": outcome.issue.body,
        "labels": outcome.issue.labels,
        "passed": outcome.report.passed,
        "counts": outcome.report.counts,
        "violations": outcome.report.violations,
        "failed_commits": outcome.failed,
    })
}

/// Compose skipped-push JSON object (pure) for testing/snapshot purposes.
pub fn compose_skipped_json<S: AsRef<str>>(git_ref: &str, branches: &[S]) -> JsonVal {
    let watched: Vec<&str> = branches.iter().map(|b| b.as_ref()).collect();
    json!({
        "skipped": true,
        "ref": git_ref,
        "branches": watched,
    })
}

/// Compose rules JSON array (pure) for testing/snapshot purposes.
pub fn compose_rules_json(rules: &[Rule]) -> JsonVal {
    let items: Vec<_> = rules
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "issue": r.issue,
                "severity": r.severity,
                "pattern": r.pattern(),
            })
        })
        .collect();
    JsonVal::Array(items)
}
