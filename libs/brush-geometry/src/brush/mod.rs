//! # Brush Reconstruction
//!
//! Turns a brush's bounding planes into visible face polygons.
//!
//! ## Algorithm
//!
//! For each face:
//! 1. Seed a huge quad on the face plane
//! 2. Clip it by the flipped plane of every sibling face, keeping the part
//!    inside the brush
//! 3. Whatever survives with 3+ points is the face polygon
//!
//! Coincident sibling planes are resolved in storage order: the later face
//! wins. All windings are built from the frozen face list before any face is
//! updated.

use crate::bounds::Bounds;
use crate::error::{FaceIssue, GeometryError, GeometryResult};
use crate::math::{snap_to_grid, Vec3};
use crate::plane::Plane;
use crate::texture::{project_uv, TexDef, TextureSize};
use crate::winding::Winding;
use config::constants::GeometryConfig;
use tracing::{debug, warn};

// =============================================================================
// FACE
// =============================================================================

/// Face input as read from a map file, before snapping.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceDef {
    /// Three points on the plane, clockwise seen from outside the brush.
    pub points: [Vec3; 3],
    /// Texture name, without extension.
    pub texture: String,
    /// `shiftX shiftY rotate scaleX scaleY [contents flags value]`.
    pub params: Vec<f64>,
}

/// One bounding plane of a brush with its texturing and, after
/// reconstruction, its polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Defining points snapped to the integer grid.
    pub points: [Vec3; 3],
    pub plane: Plane,
    pub texture: String,
    pub texdef: Option<TexDef>,
    /// Pixel size of the texture, when known.
    pub texture_size: Option<TextureSize>,
    winding: Option<Winding>,
}

impl Face {
    /// Snaps the points and builds the face plane.
    ///
    /// # Errors
    /// `DegeneratePlane` when the snapped points do not span a plane.
    pub fn new(
        points: [Vec3; 3],
        texture: impl Into<String>,
        texdef: Option<TexDef>,
        texture_size: Option<TextureSize>,
        config: &GeometryConfig,
    ) -> GeometryResult<Self> {
        let points = points.map(snap_to_grid);
        let plane = Plane::from_points(points[0], points[1], points[2], config)?;
        Ok(Self {
            points,
            plane,
            texture: texture.into(),
            texdef,
            texture_size,
            winding: None,
        })
    }

    /// Builds a face from its map definition.
    ///
    /// # Errors
    /// `DegeneratePlane` or `InvalidTexParams`.
    pub fn from_def(
        def: &FaceDef,
        texture_size: Option<TextureSize>,
        config: &GeometryConfig,
    ) -> GeometryResult<Self> {
        let texdef = TexDef::from_params(&def.params)?;
        Self::new(
            def.points,
            def.texture.clone(),
            Some(texdef),
            texture_size,
            config,
        )
    }

    /// Polygon produced by the last reconstruction, if any.
    pub fn winding(&self) -> Option<&Winding> {
        self.winding.as_ref()
    }

    /// True when both a descriptor and a usable texture size are present.
    pub fn can_project_uv(&self) -> bool {
        self.texdef.is_some() && self.texture_size.is_some_and(|s| s.is_usable())
    }

    fn project_uvs(&self, winding: &mut Winding) {
        let (Some(texdef), Some(size)) = (self.texdef.as_ref(), self.texture_size) else {
            return;
        };
        if !size.is_usable() {
            return;
        }
        for point in winding.points_mut() {
            point.uv = project_uv(point.position, texdef, size, &self.plane);
        }
    }
}

// =============================================================================
// BRUSH
// =============================================================================

/// A face that produced no polygon, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceRejection {
    /// Face index in the brush.
    pub face: usize,
    pub error: GeometryError,
}

impl FaceRejection {
    /// Locates the rejection inside a map.
    pub fn locate(self, entity: usize, brush: usize) -> FaceIssue {
        FaceIssue {
            entity,
            brush,
            face: self.face,
            error: self.error,
        }
    }
}

/// A convex solid: the intersection of its faces' back half-spaces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Brush {
    faces: Vec<Face>,
    bounds: Bounds,
}

impl Brush {
    pub fn new(faces: Vec<Face>) -> Self {
        Self {
            faces,
            bounds: Bounds::empty(),
        }
    }

    /// Builds every face from its definition without texture sizes.
    ///
    /// # Errors
    /// The first face error; a single bad face invalidates the brush.
    pub fn from_defs(defs: &[FaceDef], config: &GeometryConfig) -> GeometryResult<Self> {
        let faces = defs
            .iter()
            .map(|def| Face::from_def(def, None, config))
            .collect::<GeometryResult<Vec<_>>>()?;
        Ok(Self::new(faces))
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Bounds of all face polygons, `None` before reconstruction or when no
    /// face produced a polygon.
    pub fn bounds(&self) -> Option<Bounds> {
        (!self.bounds.is_empty()).then_some(self.bounds)
    }

    /// Face polygons in face order, skipping faces without one.
    pub fn windings(&self) -> impl Iterator<Item = &Winding> {
        self.faces.iter().filter_map(Face::winding)
    }

    /// Rebuilds every face polygon, the brush bounds and texture coordinates.
    ///
    /// Faces without a polygon are returned as rejections; the
    /// `DegenerateWinding` ones are the expected "unused plane" outcome.
    ///
    /// # Errors
    /// A fatal error (capacity overflow) leaves the brush untouched.
    pub fn reconstruct(
        &mut self,
        config: &GeometryConfig,
    ) -> Result<Vec<FaceRejection>, FaceRejection> {
        let results: Vec<GeometryResult<Winding>> = (0..self.faces.len())
            .map(|index| build_face_winding(&self.faces, index, config))
            .collect();

        if let Some((face, error)) = results
            .iter()
            .enumerate()
            .find_map(|(i, r)| r.as_ref().err().filter(|e| e.is_fatal()).map(|e| (i, e)))
        {
            return Err(FaceRejection {
                face,
                error: error.clone(),
            });
        }

        let mut bounds = Bounds::empty();
        let mut rejections = Vec::new();

        for (index, (face, result)) in self.faces.iter_mut().zip(results).enumerate() {
            match result {
                Ok(mut winding) => {
                    for p in winding.positions() {
                        bounds.add_point(p);
                    }
                    face.project_uvs(&mut winding);
                    face.winding = Some(winding);
                }
                Err(error) => {
                    face.winding = None;
                    rejections.push(FaceRejection { face: index, error });
                }
            }
        }

        self.bounds = bounds;
        Ok(rejections)
    }
}

/// Builds the polygon of `faces[index]` by clipping against its siblings.
///
/// # Errors
/// - `DuplicatePlaneConflict` when a later face repeats this plane
/// - `DegenerateWinding` when fewer than 3 points survive (0 when a clip
///   removed everything)
/// - `CapacityExceeded` from clipping
/// - `NoDominantAxis` for a NaN plane
///
/// # Panics
/// If `index` is out of range.
pub fn build_face_winding(
    faces: &[Face],
    index: usize,
    config: &GeometryConfig,
) -> GeometryResult<Winding> {
    let face = &faces[index];
    let mut winding = Winding::base_for_plane(&face.plane, config)?;
    let mut past = false;

    for (i, clip) in faces.iter().enumerate() {
        if i == index {
            past = true;
            continue;
        }

        if face.plane.is_coincident(&clip.plane, config) {
            if past {
                return Err(GeometryError::DuplicatePlaneConflict {
                    face: index,
                    duplicate: i,
                });
            }
            warn!(
                "face {} repeats the plane of face {}, using the later one",
                index,
                i
            );
            continue;
        }

        // keep the half-space behind the sibling, i.e. inside the brush
        winding = match winding.clip(&clip.plane.flip(), false, config)? {
            Some(w) => w,
            None => {
                debug!("face {} clipped away by face {}", index, i);
                return Err(GeometryError::DegenerateWinding { points: 0 });
            }
        };
    }

    if !winding.is_valid() {
        debug!("face {} left {} points", index, winding.len());
        return Err(GeometryError::DegenerateWinding {
            points: winding.len(),
        });
    }

    Ok(winding)
}
