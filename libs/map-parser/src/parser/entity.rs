//! Entity blocks and their key/value properties.

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::source::RawEntity;

impl Parser {
    /// `'{' (property | brush)* '}'`
    pub(super) fn parse_entity(&mut self) -> Result<RawEntity, ParseError> {
        let start = self.current_position();
        self.expect(TokenKind::LBrace, "'{' to open an entity")?;

        let mut entity = RawEntity::default();
        loop {
            match self.peek_kind() {
                TokenKind::String => {
                    let key = self.expect(TokenKind::String, "property key")?;
                    let value = self.expect(TokenKind::String, "property value")?;
                    entity.properties.push((key.text, value.text));
                }
                TokenKind::LBrace => entity.brushes.push(self.parse_brush()?),
                TokenKind::RBrace => {
                    self.advance();
                    break;
                }
                _ => return Err(self.error_here("property, brush or '}'")),
            }
        }

        entity.span = self.span_from(start);
        Ok(entity)
    }
}
