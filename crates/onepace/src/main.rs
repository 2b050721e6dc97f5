//! One Pace file organizer
//!
//! Sorts One Pace episode files into saga and arc folders, or flattens them
//! back into the root with `--reset`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use onepace_core::coverage::{self, ArcStatus};
use onepace_core::{Organizer, OrganizerConfig, Taxonomy, DEFAULT_MARKER};
use tracing::{info, warn, Level};

/// CLI arguments
#[derive(Parser)]
#[command(name = "onepace")]
#[command(about = "Organize One Pace files into sagas and arcs")]
#[command(version)]
struct Cli {
    /// Directory containing One Pace files
    #[arg(env = "ONEPACE_DIR", default_value = ".")]
    directory: PathBuf,

    /// Only log what would be moved
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Move every One Pace file back into the directory root
    #[arg(short, long)]
    reset: bool,

    /// Print per-arc chapter coverage after organizing
    #[arg(long, conflicts_with = "reset")]
    report: bool,

    /// Substring identifying One Pace files
    #[arg(short, long, env = "ONEPACE_MARKER", default_value = DEFAULT_MARKER)]
    marker: String,

    /// Log debug details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    let config = OrganizerConfig::new()
        .with_root(&cli.directory)
        .with_marker(&cli.marker)
        .with_dry_run(cli.dry_run);
    let organizer = Organizer::new(config).context("Failed to build organizer")?;

    if cli.reset {
        organizer
            .reset()
            .with_context(|| format!("Failed to reset {}", cli.directory.display()))?;
        return Ok(());
    }

    let mut taxonomy = Taxonomy::one_pace();
    let report = organizer
        .organize(&mut taxonomy)
        .with_context(|| format!("Failed to organize {}", cli.directory.display()))?;

    if !report.parse_failures.is_empty() || !report.unresolved.is_empty() {
        warn!(
            parse_failures = report.parse_failures.len(),
            unresolved = report.unresolved.len(),
            "Some files were left in place"
        );
    }

    if cli.report {
        print_coverage(&taxonomy)?;
    }

    Ok(())
}

fn print_coverage(taxonomy: &Taxonomy) -> Result<()> {
    for saga in coverage::report(taxonomy).context("Failed to compute coverage")? {
        let state = match saga.completed {
            Some(true) => "complete",
            Some(false) => "incomplete",
            None => "in progress",
        };
        info!("{} ({state})", saga.name);
        for arc in saga.arcs {
            match arc.status {
                ArcStatus::Incomplete { .. } => {
                    warn!("  {} [{} episode(s)]: {}", arc.name, arc.episodes, arc.status)
                }
                _ => info!("  {} [{} episode(s)]: {}", arc.name, arc.episodes, arc.status),
            }
        }
    }
    Ok(())
}
