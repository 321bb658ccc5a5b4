//! Source spans.
//!
//! Every token remembers the byte range of source text it was recognized
//! from, so its lexeme can always be recovered as `&source[span.to_range()]`.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A byte offset into source text.
pub type TextPos = u32;

/// The longest source text whose offsets fit in a [`TextPos`].
pub const MAX_SOURCE_LEN: usize = TextPos::MAX as usize;

/// Convert a byte offset into a [`TextPos`], saturating at `TextPos::MAX`
/// for offsets past [`MAX_SOURCE_LEN`].
#[inline]
pub fn text_pos(offset: usize) -> TextPos {
    TextPos::try_from(offset).unwrap_or(TextPos::MAX)
}

/// A half-open byte range `[start, start + length)` in source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Serialize)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end offsets.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// Create a span from `usize` byte offsets, as produced by slicing.
    #[inline]
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self::from_bounds(text_pos(start), text_pos(end))
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self {
            start: pos,
            length: 0,
        }
    }

    /// The end offset of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Convert to a byte range usable for slicing the source.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.end(), 15);
        assert_eq!(span.to_range(), 5..15);
    }

    #[test]
    fn test_from_bounds_and_empty() {
        let span = TextSpan::from_bounds(3, 7);
        assert_eq!(span.length, 4);
        assert!(TextSpan::empty(9).is_empty());
        assert_eq!(TextSpan::empty(9).end(), 9);
    }

    #[test]
    fn test_from_offsets() {
        assert_eq!(TextSpan::from_offsets(3, 7), TextSpan::new(3, 4));
        assert_eq!(text_pos(MAX_SOURCE_LEN), TextPos::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_offsets_past_the_limit_saturate() {
        let past = MAX_SOURCE_LEN + 10;
        assert_eq!(text_pos(past), TextPos::MAX);
        let span = TextSpan::from_offsets(MAX_SOURCE_LEN - 2, past);
        assert_eq!(span.start, TextPos::MAX - 2);
        assert_eq!(span.end(), TextPos::MAX);
    }

    #[test]
    fn test_formatting() {
        let span = TextSpan::from_bounds(2, 6);
        assert_eq!(format!("{:?}", span), "2..6");
        assert_eq!(span.to_string(), "[2, 6)");
        assert_eq!(TextSpan::empty(4).to_range(), 4..4);
    }
}
