pub mod chapter;
pub mod episode;

pub use chapter::{Chapter, ChapterRange};
pub use episode::Episode;
