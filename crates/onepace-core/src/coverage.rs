//! # Coverage Report
//!
//! Completeness of every arc and saga, computed from episodes already
//! attached to the taxonomy.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::taxonomy::{Arc, Saga, Taxonomy};

/// Completeness of one arc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArcStatus {
    /// Every chapter of the range is covered.
    Complete,
    /// Some chapters of the range have no episode yet.
    Incomplete {
        /// Uncovered chapters, ascending.
        missing: Vec<u32>,
    },
    /// The arc has no chapter range, so completeness is undefined.
    OpenEnded {
        /// Number of distinct chapters covered so far.
        covered: usize,
    },
}

/// One arc's line in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArcCoverage {
    pub name: String,
    pub episodes: usize,
    pub status: ArcStatus,
}

/// One saga's block in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SagaCoverage {
    pub name: String,
    /// `None` when an arc of the saga is open-ended.
    pub completed: Option<bool>,
    pub arcs: Vec<ArcCoverage>,
}

impl ArcCoverage {
    /// Builds the line for `arc`.
    ///
    /// Open-ended arcs are reported as such instead of failing.
    ///
    /// # Errors
    ///
    /// Propagates failures of the arc's completeness queries.
    pub fn of(arc: &Arc) -> Result<Self> {
        let status = match arc.chapter_range() {
            None => ArcStatus::OpenEnded {
                covered: arc.covered_chapters().len(),
            },
            Some(_) => {
                let missing = arc.missing_chapters()?;
                if missing.is_empty() {
                    ArcStatus::Complete
                } else {
                    ArcStatus::Incomplete { missing }
                }
            }
        };

        Ok(Self {
            name: arc.display_name(),
            episodes: arc.episodes().len(),
            status,
        })
    }
}

impl SagaCoverage {
    /// Builds the block for `saga`.
    ///
    /// # Errors
    ///
    /// See [`ArcCoverage::of`].
    pub fn of(saga: &Saga) -> Result<Self> {
        let arcs = saga
            .arcs()
            .iter()
            .map(ArcCoverage::of)
            .collect::<Result<Vec<_>>>()?;

        let completed = if saga.arcs().iter().all(|a| a.chapter_range().is_some()) {
            Some(saga.completed()?)
        } else {
            None
        };

        Ok(Self {
            name: saga.display_name(),
            completed,
            arcs,
        })
    }
}

/// Coverage of every saga, in canonical order.
///
/// # Errors
///
/// See [`ArcCoverage::of`].
pub fn report(taxonomy: &Taxonomy) -> Result<Vec<SagaCoverage>> {
    taxonomy.sagas().iter().map(SagaCoverage::of).collect()
}

impl fmt::Display for ArcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::Incomplete { missing } => {
                write!(f, "missing {} chapter(s): ", missing.len())?;
                write!(f, "{}", compact_ranges(missing))
            }
            Self::OpenEnded { covered } => write!(f, "open-ended, {covered} chapter(s) covered"),
        }
    }
}

/// Renders ascending chapters as "8-11, 15, 20-21".
fn compact_ranges(chapters: &[u32]) -> String {
    let mut parts = Vec::new();
    let mut iter = chapters.iter().copied().peekable();

    while let Some(start) = iter.next() {
        let mut end = start;
        while iter.peek() == Some(&(end + 1)) {
            end += 1;
            iter.next();
        }
        if start == end {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{start}-{end}"));
        }
    }

    parts.join(", ")
}
