//! Column spans within a single predicate source string.

use std::fmt;

/// Half-open range of character columns in a predicate source.
///
/// Predicates are single-line, so a span is just a pair of columns counted
/// in `char`s from the start of the pattern (0-based, `end` exclusive).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span for diagnostics that have no source location.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span covering the single column `col`.
    #[inline]
    pub const fn point(col: u32) -> Self {
        Span {
            start: col,
            end: col + 1,
        }
    }

    /// Create a span from `usize` columns, saturating at `u32::MAX`.
    pub fn from_cols(start: usize, end: usize) -> Self {
        let clamp = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        Span {
            start: clamp(start),
            end: clamp(end),
        }
    }

    /// Number of columns covered.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// True when the span covers no columns.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Render the caret line that underlines this span.
    ///
    /// At least one caret is always produced so that an error at the end of
    /// the input still points somewhere.
    pub fn indicator(self) -> String {
        let width = self.len().max(1) as usize;
        let mut line = " ".repeat(self.start as usize);
        line.push_str(&"^".repeat(width));
        line
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indicator_underlines_span() {
        assert_eq!(Span::new(2, 5).indicator(), "  ^^^");
    }

    #[test]
    fn empty_span_still_gets_a_caret() {
        assert_eq!(Span::new(3, 3).indicator(), "   ^");
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn from_cols_saturates() {
        let span = Span::from_cols(1, usize::MAX);
        assert_eq!(span.start, 1);
        assert_eq!(span.end, u32::MAX);
    }
}
