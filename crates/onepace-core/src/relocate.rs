//! # Relocation Executor
//!
//! Applies planned moves with a fixed conflict policy: never overwrite an
//! existing destination, never touch disk in dry-run, and treat every I/O
//! failure as a per-file problem.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::FileSystem;
use crate::planner::Placement;

/// What happened to one file.
#[derive(Debug)]
pub enum Outcome {
    /// The file was moved.
    Moved,
    /// Dry-run: the move was only reported.
    Planned,
    /// The destination already existed; the file stayed put.
    SkippedExisting,
    /// Creating the destination folder or moving the file failed.
    Failed(io::Error),
}

impl Outcome {
    /// Returns `true` for outcomes that count towards the "moved" total.
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved | Self::Planned)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved => write!(f, "moved"),
            Self::Planned => write!(f, "planned"),
            Self::SkippedExisting => write!(f, "already exists"),
            Self::Failed(err) => write!(f, "failed: {err}"),
        }
    }
}

/// Totals for a batch of relocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelocationReport {
    /// Files moved (or, in dry-run, that would have been).
    pub moved: usize,
    /// Files left alone because the destination existed.
    pub skipped: usize,
    /// Files that hit an I/O error, with the error text.
    pub failed: Vec<(PathBuf, String)>,
}

impl RelocationReport {
    /// Folds one outcome into the totals.
    pub fn record(&mut self, source: &Path, outcome: &Outcome) {
        match outcome {
            Outcome::Moved | Outcome::Planned => self.moved += 1,
            Outcome::SkippedExisting => self.skipped += 1,
            Outcome::Failed(err) => self.failed.push((source.to_path_buf(), err.to_string())),
        }
    }
}

/// Moves files according to the conflict policy.
#[derive(Debug, Clone)]
pub struct Relocator<F> {
    fs: F,
    dry_run: bool,
}

impl<F: FileSystem> Relocator<F> {
    /// Creates an executor over `fs`.
    pub fn new(fs: F, dry_run: bool) -> Self {
        Self { fs, dry_run }
    }

    /// Whether moves are only reported.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// The underlying filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Moves `source` to `destination`, creating parent folders as needed.
    ///
    /// Never returns an error; failures come back as [`Outcome::Failed`].
    pub fn relocate(&self, source: &Path, destination: &Path) -> Outcome {
        if source == destination {
            tracing::debug!(path = %source.display(), "Already in place");
            return Outcome::SkippedExisting;
        }

        if self.fs.exists(destination) {
            tracing::warn!(
                src = %source.display(),
                dest = %destination.display(),
                "Skipping: destination already exists"
            );
            return Outcome::SkippedExisting;
        }

        if self.dry_run {
            tracing::info!(
                src = %source.display(),
                dest = %destination.display(),
                "Would move"
            );
            return Outcome::Planned;
        }

        if let Some(parent) = destination.parent() {
            if !self.fs.exists(parent) {
                if let Err(err) = self.fs.create_dir_all(parent) {
                    tracing::error!(
                        dir = %parent.display(),
                        error = %err,
                        "Failed to create directory"
                    );
                    return Outcome::Failed(err);
                }
                tracing::debug!(dir = %parent.display(), "Created directory");
            }
        }

        match self.fs.rename(source, destination) {
            Ok(()) => {
                tracing::info!(src = %source.display(), dest = %destination.display(), "Moved");
                Outcome::Moved
            }
            Err(err) => {
                tracing::error!(
                    src = %source.display(),
                    dest = %destination.display(),
                    error = %err,
                    "Failed to move"
                );
                Outcome::Failed(err)
            }
        }
    }

    /// Executes every placement in order, continuing past failures.
    pub fn execute(&self, placements: &[Placement<'_>]) -> RelocationReport {
        let mut report = RelocationReport::default();
        for placement in placements {
            let outcome = self.relocate(placement.source(), &placement.destination);
            report.record(placement.source(), &outcome);
        }
        report
    }
}
