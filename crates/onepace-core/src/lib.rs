//! # One Pace Core
//!
//! Classifies One Pace episode files into saga and arc folders from the
//! metadata in their names, and can undo that classification.
//!
//! ## Quick Start
//!
//! ```rust
//! use onepace_core::parser::FilenameParser;
//! use onepace_core::{planner, resolver, Taxonomy};
//! use std::path::Path;
//!
//! let parser = FilenameParser::new().unwrap();
//! let name = "[One Pace][8-11] Orange Town 01 [720p][En Sub][D57B5C12].mkv";
//! let episode = parser.parse_name(Path::new("/media").join(name), name).unwrap();
//!
//! let mut taxonomy = Taxonomy::one_pace();
//! assert!(resolver::resolve(&mut taxonomy, episode).is_attached());
//!
//! let placements = planner::plan(&taxonomy, Path::new("/media"));
//! assert!(placements[0]
//!     .destination
//!     .starts_with("/media/01 - East Blue Saga/012 - Orange Town Arc"));
//! ```
pub mod config;
pub mod coverage;
pub mod error;
pub mod fs;
pub mod organizer;
pub mod parser;
pub mod planner;
pub mod relocate;
pub mod resolver;
pub mod scan;
pub mod taxonomy;
pub mod types;

// Re-export primary API
pub use config::{DEFAULT_MARKER, OrganizerConfig};
pub use coverage::{ArcCoverage, ArcStatus, SagaCoverage};
pub use error::{PaceError, ParseError, Result};
pub use fs::{FileSystem, StdFileSystem};
pub use organizer::{OrganizeReport, Organizer};
pub use parser::{FilenameParser, Tokenizer};
pub use planner::Placement;
pub use relocate::{Outcome, RelocationReport, Relocator};
pub use resolver::{Resolution, ResolveSummary};
pub use taxonomy::{Arc, ArcLocation, Saga, Taxonomy};
pub use types::{Chapter, ChapterRange, Episode};
