//! Loading of CLI inputs: diff files (by glob) and push event payloads.

use crate::config::Effective;
use crate::diff::{split_unified_diff, FilePatch};
use crate::error::Error;
use crate::models::event::PushEvent;
use glob::glob;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expand `patterns` relative to `root` and split every matched diff file.
///
/// Headerless diffs are attributed to `name`, or to the diff file's own path
/// when no name is given.
pub fn read_patches(root: &Path, patterns: &[String], name: Option<&str>) -> Result<Vec<FilePatch>, Error> {
    let mut out = Vec::new();
    for pat in patterns {
        let abs = if Path::new(pat).is_absolute() {
            PathBuf::from(pat)
        } else {
            root.join(pat)
        };
        let pattern = abs.to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|e| Error::InvalidGlob {
            pattern: pat.clone(),
            source: e,
        })?;
        let mut matched: Vec<PathBuf> = entries.filter_map(Result::ok).filter(|p| p.is_file()).collect();
        if matched.is_empty() {
            return Err(Error::NoMatches(pat.clone()));
        }
        matched.sort();
        for path in matched {
            let text = fs::read_to_string(&path).map_err(|e| Error::Read {
                path: path.clone(),
                source: e,
            })?;
            let fallback = match name {
                Some(n) => n.to_string(),
                None => path
                    .strip_prefix(root)
                    .unwrap_or(&path)
                    .to_string_lossy()
                    .to_string(),
            };
            let parts = split_unified_diff(&text, &fallback);
            debug!(path = %path.display(), files = parts.len(), "read diff");
            out.extend(parts);
        }
    }
    Ok(out)
}

/// Split a diff read from `reader` (typically stdin).
pub fn read_patches_from(mut reader: impl Read, name: &str) -> Result<Vec<FilePatch>, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| Error::Read {
        path: PathBuf::from("<stdin>"),
        source: e,
    })?;
    Ok(split_unified_diff(&text, name))
}

/// Load the diffs for `scan`: glob `patterns` against the resolved repository
/// root, or split `stdin` when no pattern is given.
pub fn read_scan_patches(
    eff: &Effective,
    patterns: &[String],
    name: Option<&str>,
    stdin: impl Read,
) -> Result<Vec<FilePatch>, Error> {
    if patterns.is_empty() {
        read_patches_from(stdin, name.unwrap_or("stdin"))
    } else {
        read_patches(&eff.repo_root, patterns, name)
    }
}

/// Read and parse a push event payload.
pub fn read_event(path: &Path) -> Result<PushEvent, Error> {
    let raw = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| Error::InvalidEvent {
        path: path.to_path_buf(),
        source: e,
    })
}
