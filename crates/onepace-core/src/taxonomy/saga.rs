use super::arc::Arc;
use crate::error::Result;

/// Top-level grouping of arcs. Arc order is fixed at construction and
/// drives folder numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saga {
    name: String,
    aliases: Vec<String>,
    arcs: Vec<Arc>,
}

impl Saga {
    /// Creates a saga owning `arcs` in the given order.
    #[must_use]
    pub fn new(name: impl Into<String>, arcs: Vec<Arc>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            arcs,
        }
    }

    /// Adds alternate labels for the saga.
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

    /// Folder-facing name, e.g. "East Blue Saga".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} Saga", self.name)
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

    /// Arcs in canonical order.
    #[must_use]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub(crate) fn arc_mut(&mut self, index: usize) -> Option<&mut Arc> {
        self.arcs.get_mut(index)
    }

    /// Returns `true` when every arc is completed; vacuously `true` with no arcs.
    ///
    /// # Errors
    ///
    /// Propagates `PaceError::UndefinedChapterRange` from any arc without a range.
    pub fn completed(&self) -> Result<bool> {
        // every arc is queried so an undefined range surfaces regardless of coverage
        let arcs = self
            .arcs
            .iter()
            .map(Arc::completed)
            .collect::<Result<Vec<_>>>()?;
        Ok(arcs.into_iter().all(|done| done))
    }

    /// Display names of arcs not yet completed, in order.
    ///
    /// # Errors
    ///
    /// Propagates `PaceError::UndefinedChapterRange` from any arc without a range.
    pub fn missing_arcs(&self) -> Result<Vec<String>> {
        let mut missing = Vec::new();
        for arc in &self.arcs {
            if !arc.completed()? {
                missing.push(arc.display_name());
            }
        }
        Ok(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaceError;
    use crate::types::{Chapter, ChapterRange, Episode};

    fn east_blue_pair() -> Saga {
        Saga::new(
            "East Blue",
            vec![
                Arc::new("Romance Dawn", Some(ChapterRange::new(1, 7))),
                Arc::new("Syrup Village", Some(ChapterRange::new(22, 41))),
            ],
        )
    }

    #[test]
    fn saga_keeps_arc_order() {
        let saga = east_blue_pair();
        assert_eq!(saga.arcs().len(), 2);
        assert_eq!(saga.arcs()[1].name(), "Syrup Village");
        assert_eq!(saga.display_name(), "East Blue Saga");
    }

    #[test]
    fn empty_saga_is_vacuously_complete() {
        let saga = Saga::new("Empty", Vec::new());
        assert!(saga.completed().unwrap());
        assert!(saga.missing_arcs().unwrap().is_empty());
    }

    #[test]
    fn saga_completion_follows_arcs() {
        let mut saga = east_blue_pair();
        assert!(!saga.completed().unwrap());
        assert_eq!(
            saga.missing_arcs().unwrap(),
            ["Romance Dawn Arc", "Syrup Village Arc"]
        );

        saga.arc_mut(0).unwrap().add_episode(Episode::new(
            "rd.mkv",
            "Romance Dawn",
            1,
            vec![Chapter::Range(1, 7)],
        ));
        assert_eq!(saga.missing_arcs().unwrap(), ["Syrup Village Arc"]);

        saga.arc_mut(1).unwrap().add_episode(Episode::new(
            "sv.mkv",
            "Syrup Village",
            1,
            vec![Chapter::Range(22, 41)],
        ));
        assert!(saga.completed().unwrap());
    }

    #[test]
    fn saga_with_open_ended_arc_errors() {
        let saga = Saga::new("Final", vec![Arc::new("Elbaph", None)]);
        assert!(matches!(
            saga.completed(),
            Err(PaceError::UndefinedChapterRange { .. })
        ));
    }

    #[test]
    fn open_ended_arc_errors_even_after_incomplete_arc() {
        let saga = Saga::new(
            "Final",
            vec![
                Arc::new("Egghead", Some(ChapterRange::new(1058, 1125))),
                Arc::new("Elbaph", None),
            ],
        );
        assert!(matches!(
            saga.completed(),
            Err(PaceError::UndefinedChapterRange { .. })
        ));
        assert!(matches!(
            saga.missing_arcs(),
            Err(PaceError::UndefinedChapterRange { .. })
        ));
    }

    #[test]
    fn saga_aliases() {
        let saga = Saga::new("Water 7", Vec::new()).with_aliases(["Water Seven"]);
        assert_eq!(saga.all_names().collect::<Vec<_>>(), ["Water 7", "Water Seven"]);
        assert_eq!(saga.aliases(), ["Water Seven"]);
    }
}
