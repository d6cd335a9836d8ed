//! Source spans.
//!
//! The external parser reports a `range: [start, end]` pair on every node
//! and comment. Spans are half-open character-offset windows into the
//! original source text; the emitter uses them for comment placement and
//! for bounding backward assignment scans.

use serde::Deserialize;

/// A half-open `[start, end)` range of character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "[u32; 2]")]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the span covers zero characters.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

impl From<[u32; 2]> for Span {
    fn from(range: [u32; 2]) -> Self {
        Span {
            start: range[0],
            end: range[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_of_bounds() {
        let outer = Span::new(10, 50);
        assert!(outer.contains(Span::new(10, 50)));
        assert!(outer.contains(Span::new(20, 30)));
        assert!(!outer.contains(Span::new(9, 30)));
        assert!(!outer.contains(Span::new(20, 51)));
    }

    #[test]
    fn deserializes_from_range_array() {
        let span: Span = serde_json::from_str("[3, 17]").unwrap();
        assert_eq!(span, Span::new(3, 17));
    }
}
