//! # Placement Planner
//!
//! Computes where every attached episode belongs under the root, without
//! touching the filesystem.
//!
//! ```text
//! <root>/01 - East Blue Saga/012 - Orange Town Arc/<original file name>
//! ```
//!
//! The arc prefix is the two-digit saga position followed directly by the
//! arc position, so a saga with more than nine arcs produces prefixes that
//! no longer sort or read unambiguously.

use std::path::{Path, PathBuf};

use crate::taxonomy::{Arc, ArcLocation, Saga, Taxonomy};
use crate::types::Episode;

/// Highest arc position that keeps the folder prefix unambiguous.
pub const MAX_UNAMBIGUOUS_ARC_POSITION: usize = 9;

/// Where one episode should end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<'a> {
    /// The episode being placed.
    pub episode: &'a Episode,
    /// Its arc's position in the taxonomy.
    pub location: ArcLocation,
    /// Full destination path, file name included.
    pub destination: PathBuf,
}

impl Placement<'_> {
    /// Current location of the file.
    #[must_use]
    pub fn source(&self) -> &Path {
        self.episode.source()
    }
}

/// Folder name for the saga at 1-based `position`, e.g. "01 - East Blue Saga".
#[must_use]
pub fn saga_folder_name(position: usize, saga: &Saga) -> String {
    format!("{position:02} - {}", saga.display_name())
}

/// Folder name for an arc, e.g. "012 - Orange Town Arc".
#[must_use]
pub fn arc_folder_name(saga_position: usize, arc_position: usize, arc: &Arc) -> String {
    format!("{saga_position:02}{arc_position} - {}", arc.display_name())
}

/// Plans a destination for every attached episode.
///
/// Output is ordered by saga, then arc, then attachment order; the same
/// taxonomy state always yields the same paths.
pub fn plan<'a>(taxonomy: &'a Taxonomy, root: &Path) -> Vec<Placement<'a>> {
    let mut placements = Vec::with_capacity(taxonomy.episode_count());

    for (saga_idx, saga) in taxonomy.sagas().iter().enumerate() {
        let saga_position = saga_idx + 1;
        let saga_folder = root.join(saga_folder_name(saga_position, saga));

        for (arc_idx, arc) in saga.arcs().iter().enumerate() {
            if arc.episodes().is_empty() {
                continue;
            }

            let arc_position = arc_idx + 1;
            if arc_position > MAX_UNAMBIGUOUS_ARC_POSITION {
                tracing::warn!(
                    saga = saga.name(),
                    arc = arc.name(),
                    arc_position,
                    "arc position exceeds a single digit, folder prefix is ambiguous"
                );
            }
            let arc_folder = saga_folder.join(arc_folder_name(saga_position, arc_position, arc));

            for episode in arc.episodes() {
                let Some(file_name) = episode.source().file_name() else {
                    tracing::warn!(file = %episode.source().display(), "episode has no file name, not planned");
                    continue;
                };
                placements.push(Placement {
                    episode,
                    location: ArcLocation {
                        saga: saga_idx,
                        arc: arc_idx,
                    },
                    destination: arc_folder.join(file_name),
                });
            }
        }
    }

    placements
}
