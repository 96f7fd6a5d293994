//! Pushcheck CLI binary entry point.
//! Delegates to the library for scanning and push processing and prints results.

use clap::Parser;
use pushcheck::cli::{Cli, Commands};
use pushcheck::push::{process_push, DirSource};
use pushcheck::utils::error_prefix;
use pushcheck::{config, input, output, report, rules};
use std::path::Path;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Rules { output } => {
            let eff = config::resolve_effective(None, output.as_deref(), None);
            output::print_rules(rules::catalog(), &eff.output);
        }
        Commands::Scan {
            patterns,
            name,
            repo_root,
            output,
        } => {
            let eff = config::resolve_effective(repo_root.as_deref(), output.as_deref(), None);
            let loaded = input::read_scan_patches(
                &eff,
                &patterns,
                name.as_deref(),
                std::io::stdin().lock(),
            );
            let patches = match loaded {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("{} {}", error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let rep = report::scan_patches(&patches);
            output::print_report(&rep, patches.len(), &eff.output);
            if !rep.passed {
                std::process::exit(1);
            }
        }
        Commands::Push {
            event,
            commits_dir,
            repo_root,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                commits_dir.as_deref(),
            );
            let ev = match input::read_event(Path::new(&event)) {
                Ok(ev) => ev,
                Err(e) => {
                    eprintln!("{} {}", error_prefix(), e);
                    std::process::exit(2);
                }
            };
            debug!(dir = %eff.commits_dir.display(), "using commit details directory");
            let source = DirSource::new(&eff.commits_dir);
            match process_push(&ev, &source, eff.branches.as_slice(), &eff.unknown_author) {
                Some(outcome) => {
                    output::print_push(&outcome, &eff.output);
                    if !outcome.report.passed {
                        std::process::exit(1);
                    }
                }
                None => output::print_skipped(&ev.git_ref, &eff.branches, &eff.output),
            }
        }
    }
}

/// Initialize tracing/logging based on CLI flags.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
