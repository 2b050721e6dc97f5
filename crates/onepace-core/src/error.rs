use std::path::PathBuf;

use thiserror::Error;

/// Reasons a single file name could not be turned into an
/// [`Episode`](crate::types::Episode).
///
/// Every variant is a per-file condition: the file is skipped and the run
/// continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The referenced file is not present on disk.
    #[error("file does not exist: {}", path.display())]
    SourceMissing {
        /// The path that was checked.
        path: PathBuf,
    },

    /// No `] <label> [` segment could be located in the name.
    #[error("file name does not match expected format: {name:?}")]
    MalformedName {
        /// The offending name.
        name: String,
    },

    /// The label segment holds a single token, so there is no arc label
    /// in front of the episode number.
    #[error("label {label:?} needs an arc name followed by an episode number in {name:?}")]
    LabelTooShort {
        /// The offending name.
        name: String,
        /// The label segment as found.
        label: String,
    },

    /// The trailing token of the label segment is not an integer.
    #[error("invalid episode number {token:?} in {name:?}")]
    InvalidEpisodeNumber {
        /// The offending name.
        name: String,
        /// The token that failed to parse.
        token: String,
    },

    /// Fewer than two bracket groups, so there is no chapter specifier.
    #[error("no chapter specifier bracket in {name:?}")]
    MissingChapterSpec {
        /// The offending name.
        name: String,
    },

    /// A `N-M` run spans more chapters than any single episode can cover.
    #[error("chapter range {run:?} spans more than {limit} chapters in {name:?}")]
    ChapterRangeTooWide {
        /// The offending name.
        name: String,
        /// The run as written.
        run: String,
        /// Widest span accepted.
        limit: u32,
    },

    /// The chapter specifier holds no `N` or `N-M` run.
    #[error("no valid chapters found in {spec:?}")]
    NoValidChapters {
        /// The offending name.
        name: String,
        /// Contents of the chapter specifier bracket.
        spec: String,
    },
}

impl ParseError {
    /// Returns `true` for failures caused by the shape of the name itself
    /// rather than by a missing file or an empty chapter specifier.
    #[must_use]
    pub fn is_malformed_name(&self) -> bool {
        matches!(
            self,
            Self::MalformedName { .. }
                | Self::LabelTooShort { .. }
                | Self::InvalidEpisodeNumber { .. }
        )
    }
}

/// Errors that can occur during organizer operations.
#[derive(Debug, Error)]
pub enum PaceError {
    /// A file name could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A completeness query hit an arc with no chapter range. This points
    /// at a malformed taxonomy, not at a bad file.
    #[error("{arc} Arc chapters range is not defined")]
    UndefinedChapterRange {
        /// Canonical name of the arc.
        arc: String,
    },

    /// The root handed to the organizer is not a directory.
    #[error("invalid directory: {}", path.display())]
    InvalidRoot {
        /// The rejected root.
        path: PathBuf,
    },

    /// An I/O operation on a specific path failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being operated on.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for organizer operations.
pub type Result<T> = std::result::Result<T, PaceError>;
