//! # Map Parser
//!
//! Recursive descent over the token stream:
//!
//! ```text
//! map      := entity*
//! entity   := '{' (property | brush)* '}'
//! property := STRING STRING
//! brush    := '{' face* '}'
//! face     := point point point WORD WORD*
//! point    := '(' WORD WORD WORD ')'
//! ```
//!
//! Parsing stops at the first error.

mod brush;
mod entity;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::source::MapSource;
use crate::span::{Position, Span};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for map files.
///
/// ## Example
///
/// ```rust
/// use map_parser::lexer::Lexer;
/// use map_parser::parser::Parser;
///
/// let tokens = Lexer::new("{ \"classname\" \"worldspawn\" }").tokenize().unwrap();
/// let map = Parser::new(tokens).parse().unwrap();
/// assert_eq!(map.entities[0].property("classname"), Some("worldspawn"));
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parses every entity in the token stream.
    pub fn parse(&mut self) -> Result<MapSource, ParseError> {
        let mut entities = Vec::new();
        while !self.is_at_end() {
            entities.push(self.parse_entity()?);
        }
        Ok(MapSource { entities })
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current).or_else(|| self.tokens.last())
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::Eof, |t| t.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    fn current_span(&self) -> Span {
        self.peek().map_or(Span::zero(), |t| t.span)
    }

    fn current_position(&self) -> Position {
        self.current_span().start
    }

    /// Consumes the current token. Never moves past `Eof`.
    fn advance(&mut self) -> Option<Token> {
        let token = self.peek().cloned();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Consumes a token of `kind` or fails with `expected` in the message.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            return self
                .advance()
                .ok_or_else(|| ParseError::unexpected_eof(expected));
        }
        Err(self.error_here(expected))
    }

    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Error describing the current token.
    fn error_here(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) if !token.is_eof() => {
                ParseError::unexpected_token(&token.describe(), expected).with_span(token.span)
            }
            _ => ParseError::unexpected_eof(expected).with_span(self.current_span()),
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: Position) -> Span {
        let end = self
            .current
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(start, |t| t.span.end);
        Span::new(start, end)
    }

    /// Parses a word token as a finite number.
    fn expect_number(&mut self, expected: &str) -> Result<f64, ParseError> {
        let token = self.expect(TokenKind::Word, expected)?;
        parse_number(&token)
    }
}

fn parse_number(token: &Token) -> Result<f64, ParseError> {
    match token.text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::new(
            ParseErrorKind::InvalidNumber {
                text: token.text.clone(),
            },
            token.span,
        )),
    }
}

#[cfg(test)]
mod tests;
