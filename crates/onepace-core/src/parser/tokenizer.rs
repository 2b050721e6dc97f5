//! # Bracket Tokenizer
//!
//! First stage of filename parsing: splits a name into bracket groups and
//! the free text between them, keeping byte positions.

/// What a segment of the name is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Contents of a `[...]` group, brackets excluded.
    Group,
    /// Text between two groups (or before the first / after the last).
    Text,
}

/// A slice of the name with positional information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Group or free text
    pub kind: SegmentKind,
    /// The segment text, borrowed from the input
    pub text: &'a str,
    /// Start position in the original string
    pub start: usize,
    /// End position in the original string
    pub end: usize,
}

/// Splits file names on bracket groups.
///
/// A group is a `[` followed by at least one character that is not `]`,
/// then `]`. Empty `[]` pairs and unclosed `[` stay part of the text.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a name into alternating text and group segments.
    ///
    /// Empty text between adjacent groups is not emitted.
    ///
    /// # Examples
    /// ```
    /// use onepace_core::parser::tokenizer::{SegmentKind, Tokenizer};
    ///
    /// let segments = Tokenizer::new().tokenize("[One Pace][8-11] Orange Town 01 [720p]");
    /// let groups: Vec<_> = segments
    ///     .iter()
    ///     .filter(|s| s.kind == SegmentKind::Group)
    ///     .map(|s| s.text)
    ///     .collect();
    /// assert_eq!(groups, ["One Pace", "8-11", "720p"]);
    /// ```
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut text_start = 0;

        for (open, close) in self.group_spans(input) {
            if open > text_start {
                segments.push(Segment {
                    kind: SegmentKind::Text,
                    text: &input[text_start..open],
                    start: text_start,
                    end: open,
                });
            }
            segments.push(Segment {
                kind: SegmentKind::Group,
                text: &input[open + 1..close],
                start: open,
                end: close + 1,
            });
            text_start = close + 1;
        }

        if text_start < input.len() {
            segments.push(Segment {
                kind: SegmentKind::Text,
                text: &input[text_start..],
                start: text_start,
                end: input.len(),
            });
        }

        segments
    }

    /// Contents of every bracket group, left to right.
    pub fn groups<'a>(&self, input: &'a str) -> Vec<&'a str> {
        self.group_spans(input)
            .into_iter()
            .map(|(open, close)| &input[open + 1..close])
            .collect()
    }

    /// Byte positions of each group's `[` and `]`.
    fn group_spans(&self, input: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut cursor = 0;

        while let Some(rel_open) = input[cursor..].find('[') {
            let open = cursor + rel_open;
            let Some(rel_close) = input[open + 1..].find(']') else {
                break;
            };
            let close = open + 1 + rel_close;
            if close == open + 1 {
                // "[]" is not a group; retry from the next character
                cursor = open + 1;
                continue;
            }
            spans.push((open, close));
            cursor = close + 1;
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokenizer = Tokenizer::new();
        let segments =
            tokenizer.tokenize("[One Pace][8-11] Orange Town 01 [720p][En Sub][D57B5C12]");

        assert_eq!(segments.len(), 6);
        assert_eq!(segments[0].kind, SegmentKind::Group);
        assert_eq!(segments[0].text, "One Pace");
        assert_eq!(segments[0].start, 0);
        assert_eq!(segments[0].end, 10);
        assert_eq!(segments[2].kind, SegmentKind::Text);
        assert_eq!(segments[2].text, " Orange Town 01 ");
    }

    #[test]
    fn test_groups_in_order() {
        let tokenizer = Tokenizer::new();
        let groups = tokenizer.groups("[One Pace][941-942] Wano 22 [720p][En Sub][CA70257D]");
        assert_eq!(groups, ["One Pace", "941-942", "720p", "En Sub", "CA70257D"]);
    }

    #[test]
    fn test_empty_brackets_are_text() {
        let tokenizer = Tokenizer::new();
        let segments = tokenizer.tokenize("a [] b [c]");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].kind, SegmentKind::Text);
        assert_eq!(segments[0].text, "a [] b ");
        assert_eq!(segments[1].text, "c");
    }

    #[test]
    fn test_unclosed_bracket_is_text() {
        let tokenizer = Tokenizer::new();
        let segments = tokenizer.tokenize("[x] tail [open");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].kind, SegmentKind::Text);
        assert_eq!(segments[1].text, " tail [open");
    }

    #[test]
    fn test_nested_open_bracket_belongs_to_group() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.groups("[a[b] c"), ["a[b"]);
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.groups("no brackets here").is_empty());
    }
}
