use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::chapter::{self, Chapter};

/// One episode file, as read from its name.
///
/// Immutable once built; `covered_chapters` is always the flattened union
/// of `chapters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    source: PathBuf,
    arc_label: String,
    episode_number: u32,
    chapters: Vec<Chapter>,
    covered_chapters: BTreeSet<u32>,
}

impl Episode {
    /// Builds an episode and derives its covered chapters.
    #[must_use]
    pub fn new(
        source: impl Into<PathBuf>,
        arc_label: impl Into<String>,
        episode_number: u32,
        chapters: Vec<Chapter>,
    ) -> Self {
        let covered_chapters = chapter::flatten(&chapters);
        Self {
            source: source.into(),
            arc_label: arc_label.into(),
            episode_number,
            chapters,
            covered_chapters,
        }
    }

    /// Path of the underlying file.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Arc label as written in the file name. Not guaranteed to resolve.
    #[must_use]
    pub fn arc_label(&self) -> &str {
        &self.arc_label
    }

    /// Episode number within the arc.
    #[must_use]
    pub fn episode_number(&self) -> u32 {
        self.episode_number
    }

    /// Chapter entries in filename order.
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Every chapter number this episode covers.
    #[must_use]
    pub fn covered_chapters(&self) -> &BTreeSet<u32> {
        &self.covered_chapters
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02} [", self.arc_label, self.episode_number)?;
        for (i, chapter) in self.chapters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{chapter}")?;
        }
        write!(f, "]")
    }
}
