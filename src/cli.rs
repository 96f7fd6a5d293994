//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pushcheck",
    version,
    about = "Compliance checks for pushed diffs",
    long_about = "Pushcheck — scan pushed changes for hardcoded secrets, unsafe eval, disabled lint rules, and leftover debug/TODO markers.\n\nConfiguration precedence: CLI > pushcheck.toml > defaults.",
    after_help = "Examples:\n  git diff HEAD~1 | pushcheck scan\n  pushcheck scan 'patches/*.diff' --output json\n  pushcheck push --event event.json --commits-dir fixtures/commits\n  pushcheck rules",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, short, global = true, help = "Log progress at info level")]
    pub verbose: bool,
    #[arg(long, global = true, help = "Log at debug level")]
    pub debug: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current pushcheck version.")]
    Version,
    /// List the built-in rule catalog
    #[command(
        about = "List rules",
        long_about = "Print the fixed rule catalog in evaluation order with severity and issue text."
    )]
    Rules {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Scan unified diffs
    #[command(
        about = "Scan unified diffs",
        long_about = "Split unified diffs into per-file fragments and run the rule catalog over each. Reads stdin when no pattern is given. Exits 1 when violations are found.",
        after_help = "Examples:\n  git diff main | pushcheck scan\n  pushcheck scan 'patches/*.patch'"
    )]
    Scan {
        #[arg(help = "Diff files or glob patterns (default: stdin)")]
        patterns: Vec<String>,
        #[arg(long, help = "File name for diffs without `diff --git` headers")]
        name: Option<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Process a push event payload
    #[command(
        about = "Process a push event",
        long_about = "Apply the branch filter to a push payload, load each commit's changed files, and print the compliance issue draft. Exits 1 when violations are found.",
        after_help = "Examples:\n  pushcheck push --event push.json\n  pushcheck push --event push.json --commits-dir fixtures/commits --output json"
    )]
    Push {
        #[arg(long, help = "Path to the push event JSON payload")]
        event: String,
        #[arg(long, help = "Directory holding <sha>.json commit details")]
        commits_dir: Option<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
