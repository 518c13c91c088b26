//! # Character Cursor
//!
//! Peekable cursor over map source text that tracks byte, line and column.
//!
//! ## Example
//!
//! ```rust
//! use map_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("( 0");
//! assert_eq!(cursor.advance(), Some('('));
//! cursor.skip_whitespace();
//! assert_eq!(cursor.peek(), Some('0'));
//! ```

use crate::span::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
pub struct Cursor<'a> {
    source: &'a str,
    byte: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            line: 0,
            column: 0,
        }
    }

    /// Current position.
    pub fn position(&self) -> Position {
        Position::new(self.byte, self.line, self.column)
    }

    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Current character, not consumed.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one.
    pub fn peek_next(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// True when the remaining text starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consumes one character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while `predicate` holds.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    pub fn skip_whitespace(&mut self) {
        self.advance_while(char::is_whitespace);
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: Position) -> &'a str {
        self.source.get(start.byte..self.byte).unwrap_or("")
    }

    fn rest(&self) -> &'a str {
        self.source.get(self.byte..).unwrap_or("")
    }
}

// =============================================================================
// TESTS
// =============================================================================
