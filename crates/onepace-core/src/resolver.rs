//! # Arc Resolver
//!
//! Matches parsed episodes against the taxonomy's label index and attaches
//! them to their arc. This is the only path that mutates the taxonomy.

use crate::taxonomy::{ArcLocation, Taxonomy};
use crate::types::Episode;

/// Outcome of resolving one episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The episode now belongs to the arc at this location.
    Attached(ArcLocation),
    /// No arc carries the episode's label; the episode is handed back.
    Unresolved(Episode),
}

impl Resolution {
    /// Returns `true` if the episode was attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached(_))
    }
}

/// Looks up `episode.arc_label()` and attaches the episode on a hit.
pub fn resolve(taxonomy: &mut Taxonomy, episode: Episode) -> Resolution {
    let Some(location) = taxonomy.lookup(episode.arc_label()) else {
        return Resolution::Unresolved(episode);
    };

    match taxonomy.attach(location, episode) {
        Ok(()) => Resolution::Attached(location),
        Err(episode) => Resolution::Unresolved(episode),
    }
}

/// Totals from resolving a batch of episodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    /// Episodes attached to an arc.
    pub attached: usize,
    /// Episodes whose label matched nothing, in input order.
    pub unresolved: Vec<Episode>,
}

/// Resolves every episode, warning about each unresolved one.
pub fn resolve_all<I>(taxonomy: &mut Taxonomy, episodes: I) -> ResolveSummary
where
    I: IntoIterator<Item = Episode>,
{
    let mut summary = ResolveSummary::default();

    for episode in episodes {
        match resolve(taxonomy, episode) {
            Resolution::Attached(_) => summary.attached += 1,
            Resolution::Unresolved(episode) => {
                tracing::warn!(
                    file = %episode.source().display(),
                    label = episode.arc_label(),
                    "No matching arc"
                );
                summary.unresolved.push(episode);
            }
        }
    }

    summary
}
