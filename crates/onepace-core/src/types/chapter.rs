use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of an episode's chapter specifier, in filename order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chapter {
    /// Single chapter: "8", "1058"
    Single(u32),

    /// Inclusive chapter range: "8-11"
    Range(u32, u32),
}

impl Chapter {
    /// Iterates every chapter number this entry covers, inclusive on both ends.
    ///
    /// A reversed range ("11-8") covers nothing.
    pub fn numbers(self) -> impl Iterator<Item = u32> {
        let (start, end) = match self {
            Self::Single(n) => (n, n),
            Self::Range(start, end) => (start, end),
        };
        start..=end
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::Range(start, end) => write!(f, "{start}-{end}"),
        }
    }
}

/// The canonical, inclusive chapter span of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterRange {
    /// First chapter of the arc.
    pub start: u32,
    /// Last chapter of the arc.
    pub end: u32,
}

impl ChapterRange {
    /// Creates a new inclusive range.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `chapter` falls inside the range.
    #[must_use]
    pub fn contains(&self, chapter: u32) -> bool {
        (self.start..=self.end).contains(&chapter)
    }

    /// Every chapter in the range as a set.
    #[must_use]
    pub fn to_set(&self) -> BTreeSet<u32> {
        (self.start..=self.end).collect()
    }
}

impl fmt::Display for ChapterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Flattens chapter entries into the set of chapter numbers they cover.
pub fn flatten<'a>(chapters: impl IntoIterator<Item = &'a Chapter>) -> BTreeSet<u32> {
    chapters.into_iter().flat_map(|c| c.numbers()).collect()
}
