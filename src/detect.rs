//! Rule engine: scans one file's diff fragment against the catalog.

use crate::models::Violation;
use crate::rules::catalog;

/// Scan `diff_text` and return one violation per matching catalog rule, in
/// catalog order. `filename` is copied into each record as-is.
pub fn detect(filename: &str, diff_text: &str) -> Vec<Violation> {
    catalog()
        .iter()
        .filter(|rule| rule.is_match(diff_text))
        .map(|rule| Violation {
            file: filename.to_string(),
            issue: rule.issue.to_string(),
            severity: rule.severity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_clean_fragment_yields_nothing() {
        let diff = "@@ -1,3 +1,3 @@\n function add(a, b) {\n-  return a+b;\n+  return a + b;\n }";
        assert!(detect("src/utils.js", diff).is_empty());
    }

    #[test]
    fn test_hardcoded_password() {
        let v = detect("config.js", "const password = 'secret123';");
        assert_eq!(
            v,
            vec![Violation {
                file: "config.js".into(),
                issue: "Hardcoded password detected".into(),
                severity: Severity::High,
            }]
        );
    }

    #[test]
    fn test_repeated_matches_count_once() {
        let diff = "+console.log('a')\n+console.log('b')\n+console.error('c')";
        let v = detect("app.js", diff);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].severity, Severity::Low);
    }

    #[test]
    fn test_catalog_order_within_file() {
        let diff = "+eval(x) // TODO: remove\n+console.log('test')\n+const password = 'secret123';\n+// @ts-ignore";
        let v = detect("a.ts", diff);
        let issues: Vec<_> = v.iter().map(|v| v.issue.as_str()).collect();
        assert_eq!(
            issues,
            vec![
                "Hardcoded password detected",
                "Console statements detected - use proper logging framework",
                "TODO/FIXME comments detected - should be tracked as issues",
                "Linting rules disabled - fix the underlying issue instead",
                "Unsafe eval() usage detected",
            ]
        );
        assert!(v.iter().all(|x| x.file == "a.ts"));
    }

    #[test]
    fn test_every_rule_fires_alone() {
        let cases = [
            ("pwd = \"x\"", "Hardcoded password detected"),
            ("apikey: 'k'", "Hardcoded API key detected"),
            ("token = 't'", "Hardcoded secret/token detected"),
            ("aws_access_key_id", "AWS credentials detected"),
            ("console.warn(1)", "Console statements detected - use proper logging framework"),
            ("FIXME", "TODO/FIXME comments detected - should be tracked as issues"),
            ("/* eslint-disable */", "Linting rules disabled - fix the underlying issue instead"),
            ("eval('1')", "Unsafe eval() usage detected"),
        ];
        for (text, issue) in cases {
            let v = detect("f", text);
            assert_eq!(v.len(), 1, "{text}");
            assert_eq!(v[0].issue, issue);
        }
    }

    #[test]
    fn test_suppression_in_markup_and_python() {
        let v = detect("App.vue", "+<!-- eslint-disable -->\n");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].severity, Severity::Medium);
        let v = detect("a.py", "+x = foo()  # type: ignore\n");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].issue, "Linting rules disabled - fix the underlying issue instead");
    }

    #[test]
    fn test_detect_is_deterministic() {
        let diff = "+console.log('test')\n+const password = 'secret123';";
        assert_eq!(detect("x.js", diff), detect("x.js", diff));
    }

    #[test]
    fn test_filename_is_opaque() {
        let v = detect("/does/not/exist/../file.js", "eval(1)");
        assert_eq!(v[0].file, "/does/not/exist/../file.js");
    }
}
