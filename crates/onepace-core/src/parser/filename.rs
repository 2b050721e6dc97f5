use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::fs::FileSystem;
use crate::parser::tokenizer::{Segment, SegmentKind, Tokenizer};
use crate::types::{Chapter, Episode};

/// Zero-based index of the bracket group holding the chapter specifier.
const CHAPTER_SPEC_GROUP: usize = 1;

/// Widest `N-M` run accepted from a name. Longer arcs span a few hundred
/// chapters; a single episode covers far fewer.
pub const MAX_CHAPTER_SPAN: u32 = 1000;

/// Parser for names following the
/// `[<tag>][<chapters>] <arc label> <episode> [<...>]` convention.
///
/// Works in two stages: the [`Tokenizer`] locates bracket groups and the
/// text between them, then the label segment and the chapter specifier are
/// pattern-matched. Every failure comes back as a [`ParseError`] variant.
#[derive(Debug, Clone)]
pub struct FilenameParser {
    tokenizer: Tokenizer,
    re_chapter_run: Regex,
}

impl FilenameParser {
    /// Constructs a new `FilenameParser` with its pre-compiled pattern.
    ///
    /// # Errors
    ///
    /// Returns `PaceError::Regex` if the pattern fails to compile
    /// (should never happen with the static pattern defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(),
            re_chapter_run: Regex::new(r"([0-9]+)(?:-([0-9]+))?")?,
        })
    }

    /// Parses the file at `path`, checking first that it exists.
    ///
    /// The name is read from the file stem, so extensions never leak into
    /// the trailing bracket groups.
    ///
    /// # Errors
    ///
    /// `ParseError::SourceMissing` if `fs` cannot see the file, otherwise
    /// whatever [`parse_name`](Self::parse_name) reports.
    pub fn parse_path<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        path: &Path,
    ) -> std::result::Result<Episode, ParseError> {
        if !fs.exists(path) {
            return Err(ParseError::SourceMissing {
                path: path.to_path_buf(),
            });
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        self.parse_name(path, &stem)
    }

    /// Parses `name` into an [`Episode`] whose source is `source`.
    ///
    /// Performs no filesystem access.
    ///
    /// # Examples
    /// ```
    /// use onepace_core::parser::FilenameParser;
    /// use onepace_core::types::Chapter;
    ///
    /// let parser = FilenameParser::new().unwrap();
    /// let name = "[One Pace][8-11] Orange Town 01 [720p][En Sub][D57B5C12]";
    /// let episode = parser.parse_name(name, name).unwrap();
    ///
    /// assert_eq!(episode.arc_label(), "Orange Town");
    /// assert_eq!(episode.episode_number(), 1);
    /// assert_eq!(episode.chapters(), [Chapter::Range(8, 11)]);
    /// ```
    pub fn parse_name(
        &self,
        source: impl Into<PathBuf>,
        name: &str,
    ) -> std::result::Result<Episode, ParseError> {
        let segments = self.tokenizer.tokenize(name);

        let (arc_label, episode_number) = self.extract_label(name, &segments)?;
        let chapters = self.extract_chapters(name, &segments)?;

        tracing::debug!(
            name,
            arc_label = %arc_label,
            episode_number,
            chapters = chapters.len(),
            "parsed episode name"
        );

        Ok(Episode::new(source, arc_label, episode_number, chapters))
    }

    /// Finds the first `] <label> [` segment and splits it into the arc
    /// label and the trailing episode number.
    fn extract_label(
        &self,
        name: &str,
        segments: &[Segment<'_>],
    ) -> std::result::Result<(String, u32), ParseError> {
        let label = segments
            .windows(3)
            .find_map(|w| match (w[0].kind, w[1].kind, w[2].kind) {
                (SegmentKind::Group, SegmentKind::Text, SegmentKind::Group) => {
                    let text = w[1].text;
                    let padded = text.len() >= 2 && text.starts_with(' ') && text.ends_with(' ');
                    padded.then_some(text)
                }
                _ => None,
            })
            .ok_or_else(|| ParseError::MalformedName {
                name: name.to_string(),
            })?;

        let tokens: Vec<&str> = label.split_whitespace().collect();
        let Some((number, words)) = tokens.split_last().filter(|(_, words)| !words.is_empty())
        else {
            return Err(ParseError::LabelTooShort {
                name: name.to_string(),
                label: label.trim().to_string(),
            });
        };

        let episode_number = number
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidEpisodeNumber {
                name: name.to_string(),
                token: (*number).to_string(),
            })?;

        Ok((words.join(" "), episode_number))
    }

    /// Reads every `N` / `N-M` run out of the chapter specifier group.
    fn extract_chapters(
        &self,
        name: &str,
        segments: &[Segment<'_>],
    ) -> std::result::Result<Vec<Chapter>, ParseError> {
        let spec = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Group)
            .nth(CHAPTER_SPEC_GROUP)
            .map(|s| s.text)
            .ok_or_else(|| ParseError::MissingChapterSpec {
                name: name.to_string(),
            })?;

        let mut chapters = Vec::new();
        for caps in self.re_chapter_run.captures_iter(spec) {
            let run = &caps[0];
            let Some(chapter) = parse_run(&caps[1], caps.get(2).map(|m| m.as_str())) else {
                tracing::debug!(name, run, "skipping chapter run out of range");
                continue;
            };

            if let Chapter::Range(start, end) = chapter {
                if end >= start && end - start >= MAX_CHAPTER_SPAN {
                    return Err(ParseError::ChapterRangeTooWide {
                        name: name.to_string(),
                        run: run.to_string(),
                        limit: MAX_CHAPTER_SPAN,
                    });
                }
            }
            chapters.push(chapter);
        }

        if chapters.is_empty() {
            return Err(ParseError::NoValidChapters {
                name: name.to_string(),
                spec: spec.to_string(),
            });
        }

        Ok(chapters)
    }
}

/// `None` when either bound overflows `u32`.
fn parse_run(start: &str, end: Option<&str>) -> Option<Chapter> {
    let start = start.parse().ok()?;
    match end {
        Some(end) => Some(Chapter::Range(start, end.parse().ok()?)),
        None => Some(Chapter::Single(start)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::io;

    use super::*;

    fn parser() -> FilenameParser {
        FilenameParser::new().unwrap()
    }

    fn parse(name: &str) -> std::result::Result<Episode, ParseError> {
        parser().parse_name(name, name)
    }

    struct FakeFs {
        present: bool,
    }

    impl FileSystem for FakeFs {
        fn exists(&self, _path: &Path) -> bool {
            self.present
        }
        fn is_dir(&self, _path: &Path) -> bool {
            false
        }
        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            Ok(())
        }
        fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn orange_town_single_range() {
        let ep = parse("[One Pace][8-11] Orange Town 01 [720p][En Sub][D57B5C12]").unwrap();

        assert_eq!(ep.arc_label(), "Orange Town");
        assert_eq!(ep.episode_number(), 1);
        assert_eq!(ep.chapters(), [Chapter::Range(8, 11)]);
        assert_eq!(*ep.covered_chapters(), BTreeSet::from([8, 9, 10, 11]));
    }

    #[test]
    fn wano_two_digit_episode() {
        let ep = parse("[One Pace][941-942] Wano 22 [720p][En Sub][CA70257D]").unwrap();

        assert_eq!(ep.arc_label(), "Wano");
        assert_eq!(ep.episode_number(), 22);
        assert_eq!(ep.chapters(), [Chapter::Range(941, 942)]);
        assert_eq!(*ep.covered_chapters(), (941..=942).collect::<BTreeSet<_>>());
    }

    #[test]
    fn mixed_chapter_spec_keeps_order() {
        let ep = parse("[One Pace][1, 3-5,7] Romance Dawn 02 [1080p]").unwrap();

        assert_eq!(
            ep.chapters(),
            [Chapter::Single(1), Chapter::Range(3, 5), Chapter::Single(7)]
        );
        assert_eq!(*ep.covered_chapters(), BTreeSet::from([1, 3, 4, 5, 7]));
    }

    #[test]
    fn multi_word_label_with_punctuation() {
        let ep = parse("[One Pace][431-433] Post-Enies Lobby 01 [480p]").unwrap();
        assert_eq!(ep.arc_label(), "Post-Enies Lobby");

        let ep = parse("[One Pace][303-305] Long Ring Long Land 01 [720p]").unwrap();
        assert_eq!(ep.arc_label(), "Long Ring Long Land");
    }

    #[test]
    fn invalid_name_is_malformed() {
        let err = parse("Invalid_Episode_Name").unwrap_err();
        assert!(matches!(err, ParseError::MalformedName { .. }));
        assert!(err.to_string().contains("does not match expected format"));
    }

    #[test]
    fn single_token_label_is_rejected() {
        let err = parse("[One Pace][909-911] Wano [720p]").unwrap_err();
        assert!(matches!(err, ParseError::LabelTooShort { ref label, .. } if label == "Wano"));
    }

    #[test]
    fn non_numeric_episode_is_rejected() {
        let err = parse("[One Pace][909-911] Wano Country [720p]").unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidEpisodeNumber { ref token, .. } if token == "Country")
        );
    }

    #[test]
    fn missing_chapter_group() {
        // a label segment implies two groups, so exercise the chapter stage alone
        let p = parser();
        let name = "[One Pace] Orange Town 01";
        let segments = p.tokenizer.tokenize(name);
        let err = p.extract_chapters(name, &segments).unwrap_err();
        assert!(matches!(err, ParseError::MissingChapterSpec { .. }));
    }

    #[test]
    fn second_group_is_always_the_chapter_spec() {
        let ep = parse("[One Pace] Orange Town 01 [720p]").unwrap();
        assert_eq!(ep.chapters(), [Chapter::Single(720)]);
    }

    #[test]
    fn chapter_group_without_numbers() {
        let err = parse("[One Pace][TBA] Orange Town 01 [720p]").unwrap_err();
        assert!(matches!(err, ParseError::NoValidChapters { ref spec, .. } if spec == "TBA"));
    }

    #[test]
    fn overflowing_chapter_run_is_skipped() {
        let ep = parse("[One Pace][8-11, 99999999999] Orange Town 01 [720p]").unwrap();
        assert_eq!(ep.chapters(), [Chapter::Range(8, 11)]);
    }

    #[test]
    fn only_overflowing_runs_leave_no_chapters() {
        let err = parse("[One Pace][99999999999] Orange Town 01 [720p]").unwrap_err();
        assert!(matches!(err, ParseError::NoValidChapters { .. }));
    }

    #[test]
    fn overflowing_episode_number_is_rejected() {
        let err = parse("[One Pace][941-942] Wano 99999999999 [720p]").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidEpisodeNumber { ref token, .. } if token == "99999999999"
        ));
    }

    #[test]
    fn oversized_range_is_rejected() {
        let err = parse("[One Pace][1-4294967295] Wano 01 [720p]").unwrap_err();
        assert!(matches!(
            err,
            ParseError::ChapterRangeTooWide { ref run, limit, .. }
                if run == "1-4294967295" && limit == MAX_CHAPTER_SPAN
        ));
    }

    #[test]
    fn widest_accepted_range() {
        let ep = parse("[One Pace][1-1000] Wano 01 [720p]").unwrap();
        assert_eq!(ep.covered_chapters().len(), 1000);
        assert!(parse("[One Pace][1-1001] Wano 01 [720p]").is_err());
    }

    #[test]
    fn reversed_range_parses_but_covers_nothing() {
        let ep = parse("[One Pace][11-8, 12] Orange Town 01 [720p]").unwrap();
        assert_eq!(ep.chapters(), [Chapter::Range(11, 8), Chapter::Single(12)]);
        assert_eq!(
            ep.covered_chapters().iter().copied().collect::<Vec<_>>(),
            [12]
        );
    }

    #[test]
    fn label_requires_space_padding() {
        let err = parse("[One Pace][8-11]Orange Town 01[720p]").unwrap_err();
        assert!(matches!(err, ParseError::MalformedName { .. }));
    }

    #[test]
    fn parsing_is_idempotent() {
        let name = "[One Pace][12-19] Orange Town 02 [720p][En Sub][0BE187AB]";
        assert_eq!(parse(name).unwrap(), parse(name).unwrap());
    }

    #[test]
    fn parse_path_uses_stem_and_keeps_source() {
        let path = Path::new("/media/[One Pace][8-11] Orange Town 01 [720p][En Sub][D57B5C12].mkv");
        let ep = parser().parse_path(&FakeFs { present: true }, path).unwrap();

        assert_eq!(ep.source(), path);
        assert_eq!(ep.arc_label(), "Orange Town");
    }

    #[test]
    fn parse_path_checks_existence_first() {
        let path = Path::new("/media/Invalid_Episode_Name.mkv");
        let err = parser().parse_path(&FakeFs { present: false }, path).unwrap_err();
        assert_eq!(
            err,
            ParseError::SourceMissing {
                path: path.to_path_buf()
            }
        );
    }
}
