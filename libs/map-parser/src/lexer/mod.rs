//! # Map Lexer
//!
//! Splits `.map` source into braces, parentheses, quoted strings and bare
//! words. `//` starts a comment that runs to the end of the line, but only at
//! the start of a token: texture names such as `e1u1/floor1_3` keep their
//! slashes.
//!
//! ## Example
//!
//! ```rust
//! use map_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("{ \"classname\" \"worldspawn\" }").tokenize().unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::LBrace, TokenKind::String, TokenKind::String, TokenKind::RBrace, TokenKind::Eof]
//! );
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::{ParseError, ParseErrorKind};
use crate::span::{Position, Span};

// =============================================================================
// LEXER
// =============================================================================

/// Map file lexer.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenizes the whole source. The last token is always `Eof`.
    ///
    /// # Errors
    /// `UnterminatedString` when a quote is never closed.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        loop {
            self.skip_whitespace_and_comments();
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        let eof = self.cursor.position();
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(eof, eof), String::new()));
        Ok(self.tokens)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.starts_with("//") {
                self.cursor.advance_while(|c| c != '\n');
                continue;
            }
            break;
        }
    }

    fn scan_token(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.position();
        let Some(c) = self.cursor.advance() else {
            return Ok(());
        };

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '"' => return self.scan_string(start),
            _ => {
                self.cursor.advance_while(is_word_char);
                TokenKind::Word
            }
        };

        let text = self.cursor.slice_from(start).to_string();
        let span = Span::new(start, self.cursor.position());
        self.tokens.push(Token::new(kind, span, text));
        Ok(())
    }

    /// Scans the rest of a quoted string; the opening quote is consumed.
    fn scan_string(&mut self, start: Position) -> Result<(), ParseError> {
        let content_start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"');
        if self.cursor.is_eof() {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedString,
                Span::new(start, self.cursor.position()),
            ));
        }

        let text = self.cursor.slice_from(content_start).to_string();
        self.cursor.advance(); // closing quote
        let span = Span::new(start, self.cursor.position());
        self.tokens.push(Token::new(TokenKind::String, span, text));
        Ok(())
    }
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '{' | '}' | '(' | ')' | '"')
}

// =============================================================================
// TESTS
// =============================================================================
