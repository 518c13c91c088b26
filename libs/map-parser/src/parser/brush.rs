//! Brush blocks and face lines.

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::source::{RawBrush, RawFace};

impl Parser {
    /// `'{' face* '}'`
    pub(super) fn parse_brush(&mut self) -> Result<RawBrush, ParseError> {
        let start = self.current_position();
        self.expect(TokenKind::LBrace, "'{' to open a brush")?;

        let mut faces = Vec::new();
        while !self.match_token(TokenKind::RBrace) {
            if !self.check(TokenKind::LParen) {
                return Err(self.error_here("face or '}'"));
            }
            faces.push(self.parse_face()?);
        }

        Ok(RawBrush {
            faces,
            span: self.span_from(start),
        })
    }

    /// `point point point WORD WORD*`
    fn parse_face(&mut self) -> Result<RawFace, ParseError> {
        let start = self.current_position();
        let points = [self.parse_point()?, self.parse_point()?, self.parse_point()?];
        let texture = self.expect(TokenKind::Word, "texture name")?.text;

        let mut params = Vec::new();
        while self.check(TokenKind::Word) {
            params.push(self.expect_number("texture parameter")?);
        }

        Ok(RawFace {
            points,
            texture,
            params,
            span: self.span_from(start),
        })
    }

    /// `'(' x y z ')'`
    fn parse_point(&mut self) -> Result<[f64; 3], ParseError> {
        self.expect(TokenKind::LParen, "'(' to open a plane point")?;
        let point = [
            self.expect_number("x coordinate")?,
            self.expect_number("y coordinate")?,
            self.expect_number("z coordinate")?,
        ];
        self.expect(TokenKind::RParen, "')' to close a plane point")?;
        Ok(point)
    }
}
