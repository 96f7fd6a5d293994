//! Splitting of git-style unified diffs into per-file fragments.
//!
//! A fragment keeps every line of its file section (hunk headers, context,
//! added and removed lines) so rules see the same text a hosting API would
//! return as the file's `patch`.

#[derive(Debug, Clone, PartialEq, Eq)]
/// Diff text for a single changed file.
pub struct FilePatch {
    pub filename: String,
    pub patch: String,
}

/// Split `diff_text` on `diff --git` headers.
///
/// Input without any header is returned as one fragment named `fallback_name`.
/// Sections with no hunk body (binary or mode-only changes) are dropped.
pub fn split_unified_diff(diff_text: &str, fallback_name: &str) -> Vec<FilePatch> {
    if !diff_text.lines().any(|l| l.starts_with("diff --git ")) {
        if diff_text.trim().is_empty() {
            return Vec::new();
        }
        return vec![FilePatch {
            filename: fallback_name.to_string(),
            patch: diff_text.to_string(),
        }];
    }

    let mut out = Vec::new();
    let mut current: Option<Section> = None;
    for raw in diff_text.lines() {
        if raw.starts_with("diff --git ") {
            if let Some(sec) = current.take() {
                out.extend(sec.finish());
            }
            current = Some(Section::new(parse_diff_git_line(raw)));
            continue;
        }
        let Some(sec) = current.as_mut() else {
            continue;
        };
        if !sec.in_hunk {
            if let Some(p) = raw.strip_prefix("+++ ") {
                if let Some(path) = strip_side(p.trim_end(), "b/") {
                    sec.filename = Some(path);
                }
                continue;
            }
            if raw.starts_with("--- ") {
                continue;
            }
            if raw.starts_with("@@") {
                sec.in_hunk = true;
            } else {
                continue;
            }
        }
        sec.body.push_str(raw);
        sec.body.push('\n');
    }
    if let Some(sec) = current.take() {
        out.extend(sec.finish());
    }
    out
}

struct Section {
    filename: Option<String>,
    in_hunk: bool,
    body: String,
}

impl Section {
    fn new(filename: Option<String>) -> Self {
        Section {
            filename,
            in_hunk: false,
            body: String::new(),
        }
    }

    fn finish(self) -> Option<FilePatch> {
        if self.body.is_empty() {
            return None;
        }
        Some(FilePatch {
            filename: self.filename?,
            patch: self.body,
        })
    }
}

// diff --git a/foo b/foo
fn parse_diff_git_line(line: &str) -> Option<String> {
    let rest = line.strip_prefix("diff --git ")?;
    let idx = rest.find(" b/")?;
    Some(rest[idx + 3..].to_string())
}

fn strip_side(path: &str, side: &str) -> Option<String> {
    if path == "/dev/null" {
        return None;
    }
    Some(path.strip_prefix(side).unwrap_or(path).to_string())
}
