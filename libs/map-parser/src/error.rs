//! # Parse Errors
//!
//! Error types for the map parser.
//!
//! ## Example
//!
//! ```rust
//! use map_parser::error::ParseError;
//!
//! let error = ParseError::unexpected_token(")", "number");
//! assert!(error.to_string().contains("expected number"));
//! ```

use crate::span::Span;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at line {}, column {}", .span.start.line + 1, .span.start.column + 1)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Unexpected token error without a location yet.
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Unexpected end of file without a location yet.
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// 1-indexed line of the error.
    pub fn line(&self) -> usize {
        self.span.start.line + 1
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken { found: String, expected: String },

    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: String },

    /// A coordinate or texture parameter is not a finite number.
    #[error("invalid number '{text}'")]
    InvalidNumber { text: String },

    #[error("unterminated string literal")]
    UnterminatedString,
}

// =============================================================================
// TESTS
// =============================================================================
