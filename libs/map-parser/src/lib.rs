//! # Map Parser
//!
//! Parser for Id Tech 2 `.map` source text.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → MapSource
//! ```
//!
//! ## Example
//!
//! ```rust
//! use map_parser::parse;
//!
//! let map = parse(r#"
//! {
//! "classname" "worldspawn"
//! {
//! ( 0 0 64 ) ( 0 0 0 ) ( 0 64 0 ) base/wall 0 0 0 1 1
//! }
//! }
//! "#).unwrap();
//! assert_eq!(map.brush_count(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! map-parser → map-convert → brush-geometry
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod span;

pub use error::{ParseError, ParseErrorKind};
pub use source::{MapSource, RawBrush, RawEntity, RawFace};
pub use span::{Position, Span, Spanned};

/// Parses map source text.
///
/// # Errors
/// The first lexical or grammar error, with its location.
pub fn parse(source: &str) -> Result<MapSource, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    parser::Parser::new(tokens).parse()
}
