//! # Taxonomy
//!
//! The fixed Saga → Arc hierarchy, with an index from every arc name and
//! alias to the arc's position.

pub mod arc;
pub mod data;
pub mod saga;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

pub use arc::Arc;
pub use data::{ArcSpec, ONE_PACE, SagaSpec};
pub use saga::Saga;

use crate::types::Episode;

/// Position of an arc inside the taxonomy, zero-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArcLocation {
    /// Index of the owning saga.
    pub saga: usize,
    /// Index of the arc within its saga.
    pub arc: usize,
}

impl ArcLocation {
    /// 1-based saga position, as used in folder names.
    #[must_use]
    pub fn saga_position(&self) -> usize {
        self.saga + 1
    }

    /// 1-based arc position within the saga, as used in folder names.
    #[must_use]
    pub fn arc_position(&self) -> usize {
        self.arc + 1
    }
}

/// Ordered sagas plus a label index over all arc names and aliases.
///
/// Labels match case-sensitively. When one label names several arcs the
/// first in declaration order wins.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    sagas: Vec<Saga>,
    index: HashMap<String, ArcLocation>,
}

impl Taxonomy {
    /// Builds a taxonomy and its label index from `sagas`.
    #[must_use]
    pub fn new(sagas: Vec<Saga>) -> Self {
        let mut index = HashMap::new();

        for (saga_idx, saga) in sagas.iter().enumerate() {
            for (arc_idx, arc) in saga.arcs().iter().enumerate() {
                let location = ArcLocation {
                    saga: saga_idx,
                    arc: arc_idx,
                };
                for label in arc.all_names() {
                    match index.entry(label.to_string()) {
                        Entry::Vacant(slot) => {
                            slot.insert(location);
                        }
                        Entry::Occupied(existing) if *existing.get() != location => {
                            let first = *existing.get();
                            tracing::warn!(
                                label,
                                kept = %sagas[first.saga].arcs()[first.arc].display_name(),
                                ignored = %arc.display_name(),
                                "ambiguous arc label, keeping first declaration"
                            );
                        }
                        Entry::Occupied(_) => {}
                    }
                }
            }
        }

        Self { sagas, index }
    }

    /// Builds a taxonomy from a static table.
    #[must_use]
    pub fn from_specs(specs: &[SagaSpec]) -> Self {
        let sagas = specs
            .iter()
            .map(|saga| {
                let arcs = saga
                    .arcs
                    .iter()
                    .map(|arc| Arc::new(arc.name, arc.chapters).with_aliases(arc.aliases.iter().copied()))
                    .collect();
                Saga::new(saga.name, arcs).with_aliases(saga.aliases.iter().copied())
            })
            .collect();
        Self::new(sagas)
    }

    /// The built-in One Pace table.
    #[must_use]
    pub fn one_pace() -> Self {
        Self::from_specs(ONE_PACE)
    }

    /// Sagas in canonical order.
    #[must_use]
    pub fn sagas(&self) -> &[Saga] {
        &self.sagas
    }

    /// Resolves a label (canonical name or alias) to its arc position.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<ArcLocation> {
        self.index.get(label).copied()
    }

    /// The saga at `location`.
    #[must_use]
    pub fn saga(&self, location: ArcLocation) -> Option<&Saga> {
        self.sagas.get(location.saga)
    }

    /// The arc at `location`.
    #[must_use]
    pub fn arc(&self, location: ArcLocation) -> Option<&Arc> {
        self.saga(location)?.arcs().get(location.arc)
    }

    /// Attaches `episode` to the arc at `location`.
    ///
    /// Hands the episode back if `location` does not exist.
    pub fn attach(&mut self, location: ArcLocation, episode: Episode) -> Result<(), Episode> {
        match self
            .sagas
            .get_mut(location.saga)
            .and_then(|saga| saga.arc_mut(location.arc))
        {
            Some(arc) => {
                arc.add_episode(episode);
                Ok(())
            }
            None => Err(episode),
        }
    }

    /// Number of indexed labels.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.index.len()
    }

    /// Total number of episodes attached across all arcs.
    #[must_use]
    pub fn episode_count(&self) -> usize {
        self.sagas
            .iter()
            .flat_map(Saga::arcs)
            .map(|arc| arc.episodes().len())
            .sum()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::one_pace()
    }
}
