//! Push processing at the hosting-service boundary.
//!
//! Filters pushes by branch, retrieves each commit's changed files through a
//! [`CommitSource`], folds the per-commit results into a single report, and
//! prepares the issue draft. Retrieval failures are logged and skipped so one
//! bad commit never blocks the report for the rest of the push.

use crate::error::FetchError;
use crate::models::event::{ChangedFile, Commit, CommitDetails, PushEvent, RepoRef};
use crate::models::{Report, Violation};
use crate::render::{labels, render, render_title};
use crate::report::{aggregate, detect_all};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const DEFAULT_BRANCHES: &[&str] = &["main", "master"];
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Retrieval of a commit's changed files from the hosting service.
pub trait CommitSource {
    fn commit_files(&self, repo: &RepoRef, sha: &str) -> Result<Vec<ChangedFile>, FetchError>;
}

/// Reads commit details from `<dir>/<sha>.json`, one file per commit, in the
/// shape returned by the hosting API. Ids that are not hex are rejected
/// before any path is built.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirSource { dir: dir.into() }
    }
}

impl CommitSource for DirSource {
    fn commit_files(&self, _repo: &RepoRef, sha: &str) -> Result<Vec<ChangedFile>, FetchError> {
        if !is_object_id(sha) {
            return Err(FetchError::InvalidId(sha.to_string()));
        }
        let path = self.dir.join(format!("{sha}.json"));
        let raw = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::NotFound {
                sha: sha.to_string(),
                path: path.clone(),
            },
            _ => FetchError::Io {
                sha: sha.to_string(),
                source: e,
            },
        })?;
        let details: CommitDetails =
            serde_json::from_str(&raw).map_err(|e| FetchError::Malformed {
                sha: sha.to_string(),
                source: e,
            })?;
        Ok(details.files)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Title, body, and labels for the issue-creation call.
pub struct IssueDraft {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

#[derive(Debug)]
/// Result of processing a push on a watched branch.
pub struct PushOutcome {
    pub repo: RepoRef,
    pub report: Report,
    pub issue: IssueDraft,
    /// Commits whose details could not be retrieved.
    pub failed: Vec<String>,
}

fn is_object_id(sha: &str) -> bool {
    !sha.is_empty() && sha.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Branch name for a ref such as `refs/heads/main`.
pub fn branch_name(git_ref: &str) -> &str {
    git_ref.strip_prefix("refs/heads/").unwrap_or(git_ref)
}

/// Whether the ref resolves to one of `branches`.
pub fn is_watched<S: AsRef<str>>(git_ref: &str, branches: &[S]) -> bool {
    let name = branch_name(git_ref);
    branches.iter().any(|b| b.as_ref() == name)
}

/// Process a push. Returns `None` when the branch is not watched, in which
/// case no retrieval is attempted.
pub fn process_push<S: AsRef<str>>(
    event: &PushEvent,
    source: &dyn CommitSource,
    branches: &[S],
    unknown_author: &str,
) -> Option<PushOutcome> {
    if !is_watched(&event.git_ref, branches) {
        info!(git_ref = %event.git_ref, "skipping push to unwatched branch");
        return None;
    }
    let repo = event.repository.coords();
    info!(
        repo = %format!("{}/{}", repo.owner, repo.name),
        commits = event.commits.len(),
        "processing push"
    );

    let results: Vec<(&str, Result<Vec<ChangedFile>, FetchError>)> = event
        .commits
        .iter()
        .map(|c| (c.id.as_str(), source.commit_files(&repo, &c.id)))
        .collect();
    let (violations, failed) = fold_commits(results);

    let report = aggregate(violations);
    let header = header_commit(event);
    let author = header.author_name().unwrap_or(unknown_author);
    let issue = IssueDraft {
        title: render_title(&report, &header.id),
        body: render(&report, &header.id, &header.message, author),
        labels: labels(&report).iter().map(|l| l.to_string()).collect(),
    };
    debug!(passed = report.passed, total = report.counts.total, "report ready");
    Some(PushOutcome {
        repo,
        report,
        issue,
        failed,
    })
}

/// Collect violations from successful retrievals in commit order; failed
/// commits are logged and listed.
pub fn fold_commits(
    results: Vec<(&str, Result<Vec<ChangedFile>, FetchError>)>,
) -> (Vec<Violation>, Vec<String>) {
    let mut violations = Vec::new();
    let mut failed = Vec::new();
    for (sha, res) in results {
        match res {
            Ok(files) => violations.extend(scan_files(&files)),
            Err(e) => {
                warn!(commit = sha, error = %e, "failed to fetch commit details");
                failed.push(sha.to_string());
            }
        }
    }
    (violations, failed)
}

fn scan_files(files: &[ChangedFile]) -> Vec<Violation> {
    let fragments: Vec<(&str, &str)> = files
        .iter()
        .filter_map(|f| match f.patch.as_deref() {
            Some(patch) => Some((f.filename.as_str(), patch)),
            None => {
                debug!(file = %f.filename, "no textual patch, skipping");
                None
            }
        })
        .collect();
    detect_all(&fragments)
}

fn header_commit(event: &PushEvent) -> Commit {
    event
        .head_commit
        .clone()
        .or_else(|| event.commits.last().cloned())
        .unwrap_or_else(|| Commit {
            id: event.after.clone().unwrap_or_default(),
            message: String::new(),
            author: None,
        })
}
