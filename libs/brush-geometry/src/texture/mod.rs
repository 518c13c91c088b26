//! # Texture Projection
//!
//! Planar texture mapping for brush faces.
//!
//! Every face picks one of six fixed axis pairs (floor, ceiling and four wall
//! orientations) from its plane normal, projects vertex positions onto that
//! pair, then applies the face's rotation, scale and shift before normalizing
//! by the texture's pixel size.

use crate::error::{GeometryError, GeometryResult};
use crate::math::{dot, Vec2, Vec3};
use crate::plane::Plane;
use config::constants::{TEX_PARAMS_LONG, TEX_PARAMS_SHORT};
use serde::{Deserialize, Serialize};

// =============================================================================
// TEXTURE DESCRIPTOR
// =============================================================================

/// Opaque surface attributes carried through from the map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SurfaceAttributes {
    pub contents: i32,
    pub flags: i32,
    pub value: i32,
}

/// How a texture is laid onto a face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TexDef {
    /// Offset in texels along s and t.
    pub shift: [i32; 2],
    /// Rotation in degrees.
    pub rotate: f64,
    /// Texels per map unit divisor along s and t. Zero means 1.
    pub scale: [f64; 2],
    /// Present only on 8-value parameter lists.
    pub surface: Option<SurfaceAttributes>,
}

impl Default for TexDef {
    fn default() -> Self {
        Self {
            shift: [0, 0],
            rotate: 0.0,
            scale: [1.0, 1.0],
            surface: None,
        }
    }
}

impl TexDef {
    /// Parses `shiftX shiftY rotate scaleX scaleY [contents flags value]`.
    ///
    /// Shifts and surface attributes are truncated to integers.
    ///
    /// # Errors
    /// `InvalidTexParams` unless exactly 5 or 8 values are given.
    ///
    /// # Examples
    /// ```
    /// use brush_geometry::texture::TexDef;
    ///
    /// let td = TexDef::from_params(&[16.0, -8.0, 90.0, 0.5, 0.0]).unwrap();
    /// assert_eq!(td.shift, [16, -8]);
    /// assert_eq!(td.effective_scale(), [0.5, 1.0]);
    /// assert!(td.surface.is_none());
    /// ```
    pub fn from_params(params: &[f64]) -> GeometryResult<Self> {
        if params.len() != TEX_PARAMS_SHORT && params.len() != TEX_PARAMS_LONG {
            return Err(GeometryError::InvalidTexParams {
                count: params.len(),
            });
        }

        let surface = (params.len() == TEX_PARAMS_LONG).then(|| SurfaceAttributes {
            contents: params[5] as i32,
            flags: params[6] as i32,
            value: params[7] as i32,
        });

        Ok(Self {
            shift: [params[0] as i32, params[1] as i32],
            rotate: params[2],
            scale: [params[3], params[4]],
            surface,
        })
    }

    /// Scale with zero components replaced by 1.
    pub fn effective_scale(&self) -> [f64; 2] {
        self.scale.map(|s| if s == 0.0 { 1.0 } else { s })
    }
}

/// Pixel dimensions of a texture image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl TextureSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero-sized texture cannot normalize coordinates.
    pub fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

// =============================================================================
// AXIS SELECTION
// =============================================================================

/// Projection axes for texture `s` and `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureAxes {
    pub s: Vec3,
    pub t: Vec3,
}

/// Reference normal plus projection axes, in selection order.
const BASE_AXES: [(Vec3, TextureAxes); 6] = [
    // floor
    (
        Vec3::new(0.0, 0.0, 1.0),
        TextureAxes {
            s: Vec3::new(1.0, 0.0, 0.0),
            t: Vec3::new(0.0, -1.0, 0.0),
        },
    ),
    // ceiling
    (
        Vec3::new(0.0, 0.0, -1.0),
        TextureAxes {
            s: Vec3::new(1.0, 0.0, 0.0),
            t: Vec3::new(0.0, -1.0, 0.0),
        },
    ),
    // west wall
    (
        Vec3::new(1.0, 0.0, 0.0),
        TextureAxes {
            s: Vec3::new(0.0, 1.0, 0.0),
            t: Vec3::new(0.0, 0.0, -1.0),
        },
    ),
    // east wall
    (
        Vec3::new(-1.0, 0.0, 0.0),
        TextureAxes {
            s: Vec3::new(0.0, 1.0, 0.0),
            t: Vec3::new(0.0, 0.0, -1.0),
        },
    ),
    // south wall
    (
        Vec3::new(0.0, 1.0, 0.0),
        TextureAxes {
            s: Vec3::new(1.0, 0.0, 0.0),
            t: Vec3::new(0.0, 0.0, -1.0),
        },
    ),
    // north wall
    (
        Vec3::new(0.0, -1.0, 0.0),
        TextureAxes {
            s: Vec3::new(1.0, 0.0, 0.0),
            t: Vec3::new(0.0, 0.0, -1.0),
        },
    ),
];

/// Picks the axis pair whose reference normal best matches the plane.
///
/// Only a strictly greater dot product replaces the current choice, so ties
/// go to the earlier entry (floor before walls, west before south).
///
/// # Examples
/// ```
/// use brush_geometry::plane::Plane;
/// use brush_geometry::texture::axis_from_plane;
/// use brush_geometry::math::Vec3;
///
/// let axes = axis_from_plane(&Plane::new(Vec3::Z, 0.0));
/// assert_eq!(axes.s, Vec3::X);
/// assert_eq!(axes.t, -Vec3::Y);
/// ```
pub fn axis_from_plane(plane: &Plane) -> TextureAxes {
    let mut best = 0.0;
    let mut best_axis = 0;
    for (i, (normal, _)) in BASE_AXES.iter().enumerate() {
        let d = dot(plane.normal, *normal);
        if d > best {
            best = d;
            best_axis = i;
        }
    }
    BASE_AXES[best_axis].1
}

// =============================================================================
// UV PROJECTION
// =============================================================================

/// Sine and cosine of an angle in degrees, exact on right angles.
pub fn rotation_sin_cos(degrees: f64) -> (f64, f64) {
    if degrees == 0.0 {
        (0.0, 1.0)
    } else if degrees == 90.0 {
        (1.0, 0.0)
    } else if degrees == 180.0 {
        (0.0, -1.0)
    } else if degrees == 270.0 {
        (-1.0, 0.0)
    } else {
        degrees.to_radians().sin_cos()
    }
}

/// Texture coordinates of `position` on a face lying on `plane`.
///
/// `s` and `t` come out in texture space: one unit spans the whole image.
///
/// # Examples
/// ```
/// use brush_geometry::plane::Plane;
/// use brush_geometry::texture::{project_uv, TexDef, TextureSize};
/// use brush_geometry::math::{Vec2, Vec3};
///
/// let uv = project_uv(
///     Vec3::new(64.0, 0.0, 0.0),
///     &TexDef::default(),
///     TextureSize::new(256, 256),
///     &Plane::new(Vec3::Z, 0.0),
/// );
/// assert_eq!(uv, Vec2::new(0.25, 0.0));
/// ```
pub fn project_uv(position: Vec3, texdef: &TexDef, size: TextureSize, plane: &Plane) -> Vec2 {
    let axes = axis_from_plane(plane);
    let (sin, cos) = rotation_sin_cos(texdef.rotate);
    let [scale_s, scale_t] = texdef.effective_scale();

    let s0 = dot(position, axes.s);
    let t0 = dot(position, axes.t);

    let s = cos * s0 - sin * t0;
    let t = sin * s0 + cos * t0;

    let s = s / scale_s + f64::from(texdef.shift[0]);
    let t = t / scale_t + f64::from(texdef.shift[1]);

    Vec2::new(s / f64::from(size.width), t / f64::from(size.height))
}
