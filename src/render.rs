//! Markdown rendering of a report into an issue title and body.

use crate::models::{Report, Violation};

pub const LABEL_COMPLIANCE: &str = "compliance";
pub const LABEL_PASSED: &str = "passed";
pub const LABEL_VIOLATION: &str = "violation";

const SHORT_ID_LEN: usize = 7;

/// First seven characters of a commit id, or the id itself when shorter.
pub fn short_id(commit_id: &str) -> &str {
    match commit_id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &commit_id[..idx],
        None => commit_id,
    }
}

/// Issue title for a report.
pub fn render_title(report: &Report, commit_id: &str) -> String {
    if report.passed {
        format!("✅ Compliance Check Passed - {}", short_id(commit_id))
    } else {
        format!("🚨 Compliance Violations Detected - {}", short_id(commit_id))
    }
}

/// Labels attached to the issue: always `compliance`, then the outcome.
pub fn labels(report: &Report) -> [&'static str; 2] {
    let outcome = if report.passed {
        LABEL_PASSED
    } else {
        LABEL_VIOLATION
    };
    [LABEL_COMPLIANCE, outcome]
}

/// Render the issue body.
///
/// Violations are grouped by file in first-occurrence order; the section is
/// omitted entirely for a passing report.
pub fn render(report: &Report, commit_id: &str, commit_message: &str, author_name: &str) -> String {
    let mut out = String::new();
    out.push_str("## 🔍 Compliance Check Report\n\n");
    out.push_str(&format!("**Commit:** {}\n", short_id(commit_id)));
    out.push_str(&format!("**Author:** {}\n", author_name));
    out.push_str(&format!("**Message:** {}\n\n", commit_message));
    out.push_str("---\n\n");
    out.push_str(&report.summary);
    out.push('\n');

    if report.passed {
        return out;
    }

    out.push_str("\n### Violations\n");
    for (file, items) in group_by_file(&report.violations) {
        out.push_str(&format!("\n#### `{}`\n\n", file));
        for v in items {
            out.push_str(&format!(
                "- {} **{}**: {}\n",
                v.severity.glyph(),
                v.severity.label(),
                v.issue
            ));
        }
    }
    out.push_str("\n---\n\n");
    out.push_str("Please address these violations before merging further changes.\n");
    out
}

fn group_by_file(violations: &[Violation]) -> Vec<(&str, Vec<&Violation>)> {
    let mut groups: Vec<(&str, Vec<&Violation>)> = Vec::new();
    for v in violations {
        match groups.iter_mut().find(|(f, _)| *f == v.file) {
            Some((_, items)) => items.push(v),
            None => groups.push((v.file.as_str(), vec![v])),
        }
    }
    groups
}
