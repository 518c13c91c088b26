//! # Map Building
//!
//! Turns the parsed tree into the geometry model: snaps plane points, builds
//! planes and texture descriptors, and looks up texture sizes.
//!
//! A brush that cannot be built is replaced by an empty brush so entity and
//! brush indices keep matching the file.

use brush_geometry::{Brush, Entity, Face, FaceDef, Map, Vec3};
use config::constants::GeometryConfig;
use map_parser::{MapSource, RawBrush, RawEntity, RawFace};
use tracing::warn;

use crate::error::{ConvertError, ConvertResult};
use crate::textures::TextureCache;

/// A brush left out of the geometry model.
#[derive(Debug)]
pub struct SkippedBrush {
    pub entity: usize,
    pub brush: usize,
    /// 1-indexed line of the face that failed.
    pub line: usize,
    pub error: ConvertError,
}

/// Result of [`build_map`].
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub map: Map,
    pub skipped: Vec<SkippedBrush>,
}

/// Builds the geometry model for every entity.
///
/// # Errors
/// Only non brush-level errors; brush-level failures land in
/// [`BuildOutput::skipped`].
pub fn build_map(
    source: &MapSource,
    textures: &mut TextureCache,
    config: &GeometryConfig,
) -> ConvertResult<BuildOutput> {
    let mut output = BuildOutput::default();

    for (e, raw_entity) in source.entities.iter().enumerate() {
        let mut brushes = Vec::with_capacity(raw_entity.brushes.len());
        for (b, raw_brush) in raw_entity.brushes.iter().enumerate() {
            match build_brush(raw_brush, textures, config) {
                Ok(brush) => brushes.push(brush),
                Err((line, error)) if error.is_brush_level() => {
                    warn!(
                        "skipping brush {} of entity {} (line {}): {}",
                        b, e, line, error
                    );
                    output.skipped.push(SkippedBrush {
                        entity: e,
                        brush: b,
                        line,
                        error,
                    });
                    brushes.push(Brush::default());
                }
                Err((_, error)) => return Err(error),
            }
        }
        output.map.entities.push(build_entity(raw_entity, brushes));
    }

    Ok(output)
}

fn build_entity(raw: &RawEntity, brushes: Vec<Brush>) -> Entity {
    Entity::new(raw.property_map(), brushes)
}

/// Builds one brush, failing with the line of the offending face.
fn build_brush(
    raw: &RawBrush,
    textures: &mut TextureCache,
    config: &GeometryConfig,
) -> Result<Brush, (usize, ConvertError)> {
    let mut faces = Vec::with_capacity(raw.faces.len());
    for raw_face in &raw.faces {
        let line = raw_face.span.start.line + 1;
        let face = build_face(raw_face, textures, config).map_err(|e| (line, e))?;
        faces.push(face);
    }
    Ok(Brush::new(faces))
}

fn build_face(
    raw: &RawFace,
    textures: &mut TextureCache,
    config: &GeometryConfig,
) -> ConvertResult<Face> {
    let def = face_def(raw);
    let size = textures.lookup(&def.texture)?;
    Ok(Face::from_def(&def, size, config)?)
}

/// Geometry input for a parsed face.
pub fn face_def(raw: &RawFace) -> FaceDef {
    FaceDef {
        points: raw.points.map(Vec3::from_array),
        texture: raw.texture.clone(),
        params: raw.params.clone(),
    }
}
