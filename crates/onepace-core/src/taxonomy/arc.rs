use std::collections::BTreeSet;

use crate::error::{PaceError, Result};
use crate::types::{ChapterRange, Episode};

/// A contiguous story segment with its expected chapter span.
///
/// The only mutation after construction is [`add_episode`](Self::add_episode);
/// covered chapters only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    name: String,
    aliases: Vec<String>,
    chapters: Option<ChapterRange>,
    episodes: Vec<Episode>,
    covered_chapters: BTreeSet<u32>,
}

impl Arc {
    /// Creates an arc. `chapters` is `None` for arcs still running.
    #[must_use]
    pub fn new(name: impl Into<String>, chapters: Option<ChapterRange>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            chapters,
            episodes: Vec::new(),
            covered_chapters: BTreeSet::new(),
        }
    }

    /// Adds alternate labels that resolve to this arc.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Folder-facing name, e.g. "Orange Town Arc".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} Arc", self.name)
    }

    /// Alternate labels.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Canonical name followed by every alias.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Expected chapter span, if known.
    #[must_use]
    pub fn chapter_range(&self) -> Option<ChapterRange> {
        self.chapters
    }

    /// Attached episodes in discovery order.
    #[must_use]
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Union of every attached episode's covered chapters.
    #[must_use]
    pub fn covered_chapters(&self) -> &BTreeSet<u32> {
        &self.covered_chapters
    }

    /// Attaches an episode and folds its chapters into the running coverage.
    pub fn add_episode(&mut self, episode: Episode) {
        self.covered_chapters
            .extend(episode.covered_chapters().iter().copied());
        self.episodes.push(episode);
    }

    /// Returns `true` when every chapter of the range is covered.
    ///
    /// # Errors
    ///
    /// `PaceError::UndefinedChapterRange` if the arc has no chapter range.
    pub fn completed(&self) -> Result<bool> {
        Ok(self.missing_chapters()?.is_empty())
    }

    /// Chapters of the range not covered by any attached episode, ascending.
    ///
    /// # Errors
    ///
    /// `PaceError::UndefinedChapterRange` if the arc has no chapter range.
    pub fn missing_chapters(&self) -> Result<Vec<u32>> {
        let range = self.range()?;
        Ok((range.start..=range.end)
            .filter(|c| !self.covered_chapters.contains(c))
            .collect())
    }

    fn range(&self) -> Result<ChapterRange> {
        self.chapters.ok_or_else(|| PaceError::UndefinedChapterRange {
            arc: self.name.clone(),
        })
    }
}
