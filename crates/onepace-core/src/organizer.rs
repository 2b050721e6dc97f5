//! # Organizer
//!
//! End-to-end runs over a root directory: discover marked files, parse and
//! resolve them into the taxonomy, plan destinations and relocate. Also the
//! reverse operation, which flattens every marked file back into the root.

use std::path::PathBuf;

use crate::config::OrganizerConfig;
use crate::error::{PaceError, ParseError, Result};
use crate::fs::{FileSystem, StdFileSystem};
use crate::parser::FilenameParser;
use crate::planner;
use crate::relocate::{RelocationReport, Relocator};
use crate::resolver;
use crate::scan;
use crate::taxonomy::Taxonomy;

/// What an organize run did.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    /// Marked files discovered under the root.
    pub scanned: usize,
    /// Files skipped because their name did not parse.
    pub parse_failures: Vec<(PathBuf, ParseError)>,
    /// Files whose arc label matched no arc.
    pub unresolved: Vec<PathBuf>,
    /// Outcome of the moves.
    pub relocation: RelocationReport,
}

/// Runs organize and reset passes for one configuration.
#[derive(Debug)]
pub struct Organizer<F = StdFileSystem> {
    config: OrganizerConfig,
    parser: FilenameParser,
    relocator: Relocator<F>,
}

impl Organizer<StdFileSystem> {
    /// Creates an organizer over the real filesystem.
    ///
    /// # Errors
    ///
    /// Returns `PaceError::Regex` if the parser cannot be built.
    pub fn new(config: OrganizerConfig) -> Result<Self> {
        Self::with_fs(config, StdFileSystem)
    }
}

impl<F: FileSystem> Organizer<F> {
    /// Creates an organizer over a custom filesystem.
    ///
    /// # Errors
    ///
    /// Returns `PaceError::Regex` if the parser cannot be built.
    pub fn with_fs(config: OrganizerConfig, fs: F) -> Result<Self> {
        let relocator = Relocator::new(fs, config.dry_run);
        Ok(Self {
            config,
            parser: FilenameParser::new()?,
            relocator,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    fn ensure_root(&self) -> Result<()> {
        if self.relocator.fs().is_dir(&self.config.root) {
            Ok(())
        } else {
            Err(PaceError::InvalidRoot {
                path: self.config.root.clone(),
            })
        }
    }

    /// Discovers, parses and resolves every marked file into `taxonomy`
    /// without moving anything.
    ///
    /// Parse failures and unresolved labels are logged and recorded in the
    /// returned report; its `relocation` part stays empty.
    ///
    /// # Errors
    ///
    /// `PaceError::InvalidRoot` if the root is not a directory.
    pub fn collect(&self, taxonomy: &mut Taxonomy) -> Result<OrganizeReport> {
        self.ensure_root()?;

        let files = scan::scan(&self.config.root, &self.config.marker);
        let mut report = OrganizeReport {
            scanned: files.len(),
            ..OrganizeReport::default()
        };

        let mut episodes = Vec::with_capacity(files.len());
        for file in files {
            match self.parser.parse_path(self.relocator.fs(), &file) {
                Ok(episode) => episodes.push(episode),
                Err(err) => {
                    tracing::warn!(file = %file.display(), error = %err, "Skipping");
                    report.parse_failures.push((file, err));
                }
            }
        }

        let resolved = resolver::resolve_all(taxonomy, episodes);
        report.unresolved = resolved
            .unresolved
            .into_iter()
            .map(|episode| episode.source().to_path_buf())
            .collect();

        Ok(report)
    }

    /// Organizes every marked file under the root into saga/arc folders.
    ///
    /// # Errors
    ///
    /// `PaceError::InvalidRoot` if the root is not a directory. Per-file
    /// problems never abort the run.
    pub fn organize(&self, taxonomy: &mut Taxonomy) -> Result<OrganizeReport> {
        tracing::info!(root = %self.config.root.display(), dry_run = self.relocator.dry_run(), "Starting file organization");

        let mut report = self.collect(taxonomy)?;
        let placements = planner::plan(taxonomy, &self.config.root);
        report.relocation = self.relocator.execute(&placements);

        tracing::info!(
            moved = report.relocation.moved,
            skipped = report.relocation.skipped,
            failed = report.relocation.failed.len(),
            "Total files moved: {}",
            report.relocation.moved
        );
        Ok(report)
    }

    /// Moves every marked file found anywhere under the root back into the
    /// root itself. Files already in the root are left alone.
    ///
    /// # Errors
    ///
    /// `PaceError::InvalidRoot` if the root is not a directory.
    pub fn reset(&self) -> Result<RelocationReport> {
        self.ensure_root()?;
        tracing::info!(root = %self.config.root.display(), dry_run = self.relocator.dry_run(), "Resetting");

        let root = &self.config.root;
        let mut report = RelocationReport::default();

        for file in scan::scan(root, &self.config.marker) {
            if file.parent() == Some(root.as_path()) {
                continue;
            }
            let Some(file_name) = file.file_name() else {
                continue;
            };
            let destination = root.join(file_name);
            let outcome = self.relocator.relocate(&file, &destination);
            report.record(&file, &outcome);
        }

        tracing::info!(
            moved = report.moved,
            skipped = report.skipped,
            failed = report.failed.len(),
            "Total files reset: {}",
            report.moved
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    const NAME: &str = "[One Pace][8-11] Orange Town 01 [720p][En Sub][D57B5C12].mkv";

    #[test]
    fn invalid_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = OrganizerConfig::new().with_root(dir.path().join("missing"));
        let organizer = Organizer::new(config).unwrap();

        assert!(matches!(
            organizer.organize(&mut Taxonomy::one_pace()),
            Err(PaceError::InvalidRoot { .. })
        ));
        assert!(matches!(organizer.reset(), Err(PaceError::InvalidRoot { .. })));
    }

    #[test]
    fn collect_does_not_move() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(NAME), b"").unwrap();

        let organizer = Organizer::new(OrganizerConfig::new().with_root(dir.path())).unwrap();
        let mut taxonomy = Taxonomy::one_pace();
        let report = organizer.collect(&mut taxonomy).unwrap();

        assert_eq!(report.scanned, 1);
        assert_eq!(taxonomy.episode_count(), 1);
        assert!(dir.path().join(NAME).exists());
    }

    #[test]
    fn reset_ignores_files_already_in_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(NAME), b"").unwrap();

        let organizer = Organizer::new(OrganizerConfig::new().with_root(dir.path())).unwrap();
        let report = organizer.reset().unwrap();

        assert_eq!(report, RelocationReport::default());
        assert!(Path::new(&dir.path().join(NAME)).exists());
    }
}
