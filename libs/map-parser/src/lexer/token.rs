//! # Tokens
//!
//! Token types for the map lexer.

use crate::span::{Span, Spanned};

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// `text` holds the token's content: quoted strings without their quotes,
/// words as written.
///
/// ## Example
///
/// ```rust
/// use map_parser::lexer::{Token, TokenKind};
/// use map_parser::span::Span;
///
/// let token = Token::new(TokenKind::Word, Span::from_bytes(0, 4), "-128".to_string());
/// assert_eq!(token.text, "-128");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Text for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", self.text),
            TokenKind::Eof => "end of file".to_string(),
            _ => self.text.clone(),
        }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Quoted string like `"classname"`
    String,
    /// Bare word: a number or a texture name like `e1u1/floor1_3`
    Word,
    /// End of input
    Eof,
}
