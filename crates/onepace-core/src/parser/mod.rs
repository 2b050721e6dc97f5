pub mod filename;
pub mod tokenizer;

pub use filename::{FilenameParser, MAX_CHAPTER_SPAN};
pub use tokenizer::{Segment, SegmentKind, Tokenizer};
