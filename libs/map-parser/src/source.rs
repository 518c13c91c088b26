//! # Parsed Map Tree
//!
//! Entities, brushes and faces exactly as written in the map file. Nothing
//! here is snapped or validated beyond the grammar.

use crate::span::{Span, Spanned};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A whole `.map` file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapSource {
    pub entities: Vec<RawEntity>,
}

impl MapSource {
    /// Total number of brushes across entities.
    pub fn brush_count(&self) -> usize {
        self.entities.iter().map(|e| e.brushes.len()).sum()
    }
}

/// One `{ ... }` entity block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawEntity {
    /// Key/value pairs in file order, duplicates included.
    pub properties: Vec<(String, String)>,
    pub brushes: Vec<RawBrush>,
    pub span: Span,
}

impl RawEntity {
    /// Value of `key`; a later duplicate overrides an earlier one.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Properties as a map, later duplicates winning.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use map_parser::RawEntity;
    ///
    /// let entity = RawEntity {
    ///     properties: vec![
    ///         ("classname".into(), "light".into()),
    ///         ("light".into(), "200".into()),
    ///         ("light".into(), "300".into()),
    ///     ],
    ///     ..RawEntity::default()
    /// };
    /// let map = entity.property_map();
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map["light"], "300");
    /// ```
    pub fn property_map(&self) -> BTreeMap<String, String> {
        self.properties.iter().cloned().collect()
    }
}

impl Spanned for RawEntity {
    fn span(&self) -> Span {
        self.span
    }
}

/// One nested `{ ... }` brush block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawBrush {
    pub faces: Vec<RawFace>,
    pub span: Span,
}

impl Spanned for RawBrush {
    fn span(&self) -> Span {
        self.span
    }
}

/// `( x y z ) ( x y z ) ( x y z ) texture params...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFace {
    pub points: [[f64; 3]; 3],
    pub texture: String,
    /// Numbers after the texture name; usually 5 or 8 of them.
    pub params: Vec<f64>,
    pub span: Span,
}

impl Spanned for RawFace {
    fn span(&self) -> Span {
        self.span
    }
}
