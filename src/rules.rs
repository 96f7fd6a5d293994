//! Fixed rule catalog for lexical compliance checks.
//!
//! Each entry pairs a case-insensitive pattern with the issue text and
//! severity reported when the pattern occurs anywhere in a diff fragment.
//! Entries are evaluated in table order.

use crate::models::Severity;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// A compiled catalog entry.
pub struct Rule {
    pub id: &'static str,
    pub issue: &'static str,
    pub severity: Severity,
    pattern: Regex,
}

impl Rule {
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

const TABLE: &[(&str, &str, &str, Severity)] = &[
    (
        "hardcoded-password",
        r#"(password|passwd|pwd)\s*[:=]\s*["'][^"']+["']"#,
        "Hardcoded password detected",
        Severity::High,
    ),
    (
        "hardcoded-api-key",
        r#"api[_-]?key\s*[:=]\s*["'][^"']+["']"#,
        "Hardcoded API key detected",
        Severity::High,
    ),
    (
        "hardcoded-secret",
        r#"(secret|token)\s*[:=]\s*["'][^"']+["']"#,
        "Hardcoded secret/token detected",
        Severity::High,
    ),
    (
        "aws-credentials",
        r"aws_access_key_id|aws_secret_access_key",
        "AWS credentials detected",
        Severity::High,
    ),
    (
        "console-statement",
        r"\bconsole\.(log|debug|info|warn|error)\s*\(",
        "Console statements detected - use proper logging framework",
        Severity::Low,
    ),
    (
        "todo-marker",
        r"\b(TODO|FIXME|HACK|XXX)\b:?",
        "TODO/FIXME comments detected - should be tracked as issues",
        Severity::Low,
    ),
    (
        "lint-disabled",
        r"eslint-disable|tslint:disable|@ts-ignore|@ts-nocheck|#\s*type:\s*ignore",
        "Linting rules disabled - fix the underlying issue instead",
        Severity::Medium,
    ),
    (
        "unsafe-eval",
        r"\beval\s*\(",
        "Unsafe eval() usage detected",
        Severity::High,
    ),
];

static CATALOG: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    TABLE
        .iter()
        .map(|&(id, pat, issue, severity)| Rule {
            id,
            issue,
            severity,
            pattern: RegexBuilder::new(pat)
                .case_insensitive(true)
                .build()
                .expect("built-in rule pattern must compile"),
        })
        .collect()
});

/// The rule catalog in evaluation order.
pub fn catalog() -> &'static [Rule] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str) -> &'static Rule {
        catalog().iter().find(|r| r.id == id).unwrap()
    }

    #[test]
    fn test_catalog_order_and_size() {
        let ids: Vec<_> = catalog().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "hardcoded-password",
                "hardcoded-api-key",
                "hardcoded-secret",
                "aws-credentials",
                "console-statement",
                "todo-marker",
                "lint-disabled",
                "unsafe-eval",
            ]
        );
    }

    #[test]
    fn test_password_variants() {
        let r = rule("hardcoded-password");
        assert!(r.is_match("const password = 'secret123';"));
        assert!(r.is_match(r#"PASSWD: "hunter2""#));
        assert!(r.is_match("pwd='x'"));
        assert!(!r.is_match("const password = process.env.PASSWORD;"));
        assert!(!r.is_match("password = ''"));
    }

    #[test]
    fn test_api_key_separators() {
        let r = rule("hardcoded-api-key");
        assert!(r.is_match("api_key = 'abc'"));
        assert!(r.is_match("apiKey: \"abc\""));
        assert!(r.is_match("API-KEY='abc'"));
        assert!(!r.is_match("apiKey = config.key"));
    }

    #[test]
    fn test_secret_token() {
        let r = rule("hardcoded-secret");
        assert!(r.is_match("token = \"abc\""));
        assert!(r.is_match("Secret: 'shh'"));
        assert!(!r.is_match("const tokens = []"));
    }

    #[test]
    fn test_aws_literals() {
        let r = rule("aws-credentials");
        assert!(r.is_match("AWS_ACCESS_KEY_ID=AKIA..."));
        assert!(r.is_match("aws_secret_access_key"));
        assert!(!r.is_match("aws_region"));
    }

    #[test]
    fn test_console_calls() {
        let r = rule("console-statement");
        for m in ["log", "debug", "info", "warn", "error"] {
            assert!(r.is_match(&format!("console.{m}('x')")));
        }
        assert!(!r.is_match("console.table(rows)"));
        assert!(!r.is_match("logger.info('x')"));
    }

    #[test]
    fn test_todo_markers() {
        let r = rule("todo-marker");
        assert!(r.is_match("// TODO: later"));
        assert!(r.is_match("# fixme"));
        assert!(r.is_match("/* HACK */"));
        assert!(r.is_match("XXX remove"));
        assert!(!r.is_match("const todos = []"));
    }

    #[test]
    fn test_lint_suppression() {
        let r = rule("lint-disabled");
        assert!(r.is_match("// eslint-disable-next-line no-console"));
        assert!(r.is_match("/* eslint-disable */"));
        assert!(r.is_match("// @ts-ignore"));
        assert!(r.is_match("// @ts-nocheck"));
        assert!(!r.is_match("eslint --fix"));
    }

    #[test]
    fn test_lint_suppression_other_comment_forms() {
        let r = rule("lint-disabled");
        assert!(r.is_match("+<!-- eslint-disable -->"));
        assert!(r.is_match("/*eslint-disable*/"));
        assert!(r.is_match("{/* eslint-disable-line */}"));
        assert!(r.is_match("// tslint:disable-next-line"));
        assert!(r.is_match("+x = foo()  # type: ignore"));
        assert!(r.is_match("y = bar()  # type: ignore[attr-defined]"));
        assert!(r.is_match("#type:ignore"));
        assert!(!r.is_match("# type hints are ignored here"));
        assert!(!r.is_match("tslint.json"));
    }

    #[test]
    fn test_eval_call() {
        let r = rule("unsafe-eval");
        assert!(r.is_match("eval(code)"));
        assert!(r.is_match("window.eval (x)"));
        assert!(!r.is_match("evaluate(x)"));
        assert!(!r.is_match("retrieval(x)"));
    }
}
