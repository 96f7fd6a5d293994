//! Report aggregation: folds violations into a pass/fail report.
//!
//! The summary line always lists the three severity buckets in the order
//! high, medium, low, including zero counts.

use crate::detect::detect;
use crate::diff::FilePatch;
use crate::models::{Counts, Report, Severity, Violation};
use rayon::prelude::*;

pub const PASSED_SUMMARY: &str = "✅ All compliance checks passed!";

/// Build a report from violations already in detection order.
pub fn aggregate(violations: Vec<Violation>) -> Report {
    let counts = count(&violations);
    let passed = violations.is_empty();
    let summary = if passed {
        PASSED_SUMMARY.to_string()
    } else {
        format!(
            "❌ Found {} violation(s): {} high, {} medium, {} low",
            counts.total, counts.high, counts.medium, counts.low
        )
    };
    Report {
        violations,
        passed,
        counts,
        summary,
    }
}

fn count(violations: &[Violation]) -> Counts {
    let by = |sev: Severity| violations.iter().filter(|v| v.severity == sev).count();
    Counts {
        total: violations.len(),
        high: by(Severity::High),
        medium: by(Severity::Medium),
        low: by(Severity::Low),
    }
}

/// Detect across patches in parallel, keeping patch order, and aggregate.
pub fn scan_patches(patches: &[FilePatch]) -> Report {
    let fragments: Vec<(&str, &str)> = patches
        .iter()
        .map(|p| (p.filename.as_str(), p.patch.as_str()))
        .collect();
    aggregate(detect_all(&fragments))
}

/// Run the rule engine over `(filename, diff_text)` fragments; results
/// follow fragment order.
pub fn detect_all(fragments: &[(&str, &str)]) -> Vec<Violation> {
    let per_file: Vec<Vec<Violation>> = fragments
        .par_iter()
        .map(|&(file, text)| detect(file, text))
        .collect();
    per_file.into_iter().flatten().collect()
}
