//! # Source Spans
//!
//! Byte/line/column locations in map source text.
//!
//! Lines and columns are stored 0-indexed and displayed 1-indexed, the way
//! editors report them.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// POSITION
// =============================================================================

/// A point in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line, 0-indexed.
    pub line: usize,
    /// Column in characters, 0-indexed.
    pub column: usize,
}

impl Position {
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A half-open range `[start, end)` of source text.
///
/// ## Example
///
/// ```rust
/// use map_parser::span::{Position, Span};
///
/// let a = Span::new(Position::new(0, 0, 0), Position::new(1, 0, 1));
/// let b = Span::new(Position::new(4, 1, 2), Position::new(6, 1, 4));
/// let both = a.merge(b);
/// assert_eq!((both.start.byte, both.end.byte), (0, 6));
/// assert_eq!(both.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span on the first line, for tests and synthetic tokens.
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 0, start),
            end: Position::new(end, 0, end),
        }
    }

    /// Empty span at the start of the source.
    pub const fn zero() -> Self {
        Self::from_bytes(0, 0)
    }

    /// Smallest span covering both.
    pub fn merge(self, other: Span) -> Span {
        let start = if other.start.byte < self.start.byte {
            other.start
        } else {
            self.start
        };
        let end = if other.end.byte > self.end.byte {
            other.end
        } else {
            self.end
        };
        Span { start, end }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The spanned text.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start.byte..self.end.byte).unwrap_or("")
    }
}

/// Anything that knows where it came from.
pub trait Spanned {
    fn span(&self) -> Span;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_displays_one_indexed() {
        assert_eq!(Position::new(12, 2, 4).to_string(), "3:5");
    }

    #[test]
    fn test_span_text() {
        let source = "{ \"classname\" }";
        assert_eq!(Span::from_bytes(2, 13).text(source), "\"classname\"");
        assert_eq!(Span::from_bytes(10, 99).text(source), "");
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = Span::from_bytes(3, 5);
        let b = Span::from_bytes(8, 9);
        assert_eq!(a.merge(b), b.merge(a));
        assert!(Span::zero().is_empty());
    }
}
