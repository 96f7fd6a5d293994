//! Configuration discovery and effective settings resolution.
//!
//! Pushcheck reads `pushcheck.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `output`: `human`
//! - `branches`: `["main", "master"]`
//! - `commits_dir`: `.pushcheck/commits`
//! - `unknown_author`: `unknown`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::push::{DEFAULT_BRANCHES, UNKNOWN_AUTHOR};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_NAMES: [&str; 3] = ["pushcheck.toml", "pushcheck.yaml", "pushcheck.yml"];
const DEFAULT_COMMITS_DIR: &str = ".pushcheck/commits";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `pushcheck.toml|yaml`.
pub struct PushcheckConfig {
    pub output: Option<String>,
    pub branches: Option<Vec<String>>,
    pub commits_dir: Option<String>,
    pub unknown_author: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub branches: Vec<String>,
    pub commits_dir: PathBuf,
    pub unknown_author: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `pushcheck.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PushcheckConfig` from `pushcheck.toml` or `pushcheck.yaml|yml`.
///
/// Unreadable or invalid files are reported and treated as absent.
pub fn load_config(root: &Path) -> Option<PushcheckConfig> {
    let toml_path = root.join("pushcheck.toml");
    if toml_path.exists() {
        let s = read_logged(&toml_path)?;
        return match toml::from_str(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!(path = %toml_path.display(), error = %e, "ignoring invalid config");
                None
            }
        };
    }
    for yml in ["pushcheck.yaml", "pushcheck.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read_logged(&p)?;
            return match serde_yaml::from_str(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "ignoring invalid config");
                    None
                }
            };
        }
    }
    None
}

fn read_logged(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read config");
            None
        }
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_commits_dir: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();
    debug!(root = %repo_root.display(), "resolved repository root");

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let branches = cfg
        .branches
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DEFAULT_BRANCHES.iter().map(|b| b.to_string()).collect());

    // Relative directories resolve against the repository root
    let commits_dir = match cli_commits_dir {
        Some(d) => PathBuf::from(d),
        None => repo_root.join(cfg.commits_dir.as_deref().unwrap_or(DEFAULT_COMMITS_DIR)),
    };

    let unknown_author = cfg
        .unknown_author
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    Effective {
        repo_root,
        output,
        branches,
        commits_dir,
        unknown_author,
    }
}
