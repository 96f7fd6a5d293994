//! Pushcheck core library.
//!
//! This crate scans the diffs introduced by a push for pattern-based
//! compliance violations and turns them into an issue-ready report.
//!
//! High-level modules:
//! - `rules`: The fixed, ordered rule catalog.
//! - `detect`: Rule engine over a single file's diff fragment.
//! - `report`: Aggregation of violations into a pass/fail report.
//! - `render`: Markdown issue title, body, and labels.
//! - `diff`: Splitting of unified diffs into per-file fragments.
//! - `push`: Branch filter, commit retrieval fold, and issue draft.
//! - `models`: Violation/report types and push payload schema.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `input`: Loading diff files and event payloads for the CLI.
//! - `output`: Human/JSON printers.
//! - `error`: Boundary error types.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod detect;
pub mod diff;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod push;
pub mod render;
pub mod report;
pub mod rules;
pub mod utils;

pub use detect::detect;
pub use models::{Report, Severity, Violation};
pub use render::{labels, render, render_title};
pub use report::aggregate;
