use pushcheck::error::FetchError;
use pushcheck::models::event::{ChangedFile, PushEvent, RepoRef};
use pushcheck::push::{process_push, CommitSource, DirSource, DEFAULT_BRANCHES, UNKNOWN_AUTHOR};
use pushcheck::{aggregate, detect, render, render_title, Severity};
use std::cell::Cell;
use std::fs;

fn event_json(git_ref: &str) -> String {
    format!(
        r#"{{
  "ref": "{git_ref}",
  "after": "9f8e7d6c5b4a",
  "pusher": {{"name": "octo"}},
  "repository": {{"name": "webapp", "owner": {{"login": "acme"}}}},
  "commits": [
    {{"id": "1111111aaaa", "message": "add config", "author": {{"name": "Dana"}}}},
    {{"id": "2222222bbbb", "message": "add utils", "author": {{"name": "Dana"}}}}
  ]
}}"#
    )
}

struct CountingSource(Cell<usize>);

impl CommitSource for CountingSource {
    fn commit_files(&self, _repo: &RepoRef, _sha: &str) -> Result<Vec<ChangedFile>, FetchError> {
        self.0.set(self.0.get() + 1);
        Ok(Vec::new())
    }
}

#[test]
fn scenario_a_hardcoded_password() {
    let violations = detect("config.js", "const password = 'secret123';");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].severity, Severity::High);
    assert_eq!(violations[0].issue, "Hardcoded password detected");

    let report = aggregate(violations);
    assert!(!report.passed);
    assert!(render_title(&report, "abcdef123456").contains("Violations Detected"));
    let body = render(&report, "abcdef123456", "add config", "Dana");
    assert!(body.contains("### Violations"));
    assert!(body.contains("#### `config.js`"));
    assert!(body.contains("- 🔴 **HIGH**: Hardcoded password detected"));
}

#[test]
fn scenario_b_clean_change() {
    let violations = detect("src/utils.js", "function add(a, b) { return a + b; }");
    assert!(violations.is_empty());

    let report = aggregate(violations);
    assert!(report.passed);
    assert!(render_title(&report, "abcdef123456").contains("Passed"));
    let body = render(&report, "abcdef123456", "add utils", "Dana");
    assert!(body.contains("All compliance checks passed"));
    assert!(!body.contains("Violations"));
}

#[test]
fn scenario_c_two_violations_one_file() {
    let diff = "+console.log('test')\n+const password = 'secret123';\n";
    let violations = detect("app.js", diff);
    let sevs: Vec<_> = violations.iter().map(|v| v.severity).collect();
    assert_eq!(sevs, vec![Severity::High, Severity::Low]);

    let report = aggregate(violations);
    assert_eq!(report.counts.total, 2);
    let body = render(&report, "abc", "m", "a");
    assert_eq!(body.matches("#### `app.js`").count(), 1);
    let high = body.find("**HIGH**").unwrap();
    let low = body.find("**LOW**").unwrap();
    assert!(high < low);
}

#[test]
fn scenario_d_unwatched_branch() {
    let ev: PushEvent = serde_json::from_str(&event_json("refs/heads/develop")).unwrap();
    let source = CountingSource(Cell::new(0));
    assert!(process_push(&ev, &source, DEFAULT_BRANCHES, UNKNOWN_AUTHOR).is_none());
    assert_eq!(source.0.get(), 0);
}

#[test]
fn push_through_commit_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("1111111aaaa.json"),
        r#"{"files": [
            {"filename": "config.js", "patch": "@@ -0,0 +1 @@\n+const password = 'secret123';"},
            {"filename": "logo.png"}
        ]}"#,
    )
    .unwrap();
    // no details file for 2222222bbbb

    let ev: PushEvent = serde_json::from_str(&event_json("refs/heads/main")).unwrap();
    let source = DirSource::new(dir.path());
    let out = process_push(&ev, &source, DEFAULT_BRANCHES, UNKNOWN_AUTHOR).unwrap();

    assert_eq!(out.failed, vec!["2222222bbbb"]);
    assert_eq!(out.report.violations.len(), 1);
    assert_eq!(out.issue.title, "🚨 Compliance Violations Detected - 2222222");
    assert_eq!(out.issue.labels, vec!["compliance", "violation"]);
    assert!(out.issue.body.contains("**Author:** Dana\n"));
    assert!(out.issue.body.contains("**Message:** add utils\n"));
}

#[test]
fn counts_always_sum_to_total() {
    let diffs = [
        ("a.js", "eval(x); // TODO"),
        ("b.ts", "// @ts-ignore\nconsole.debug(1)"),
        ("c.py", "api_key = 'k'\nAWS_SECRET_ACCESS_KEY"),
        ("d.rs", "fn main() {}"),
    ];
    let all: Vec<_> = diffs.iter().flat_map(|(f, d)| detect(f, d)).collect();
    let report = aggregate(all);
    let c = report.counts;
    assert_eq!(c.high + c.medium + c.low, c.total);
    assert_eq!(c.total, report.violations.len());
    assert_eq!(c.medium, 1);
}
