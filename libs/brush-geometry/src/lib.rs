//! # Brush Geometry
//!
//! Visible face polygons for brushes defined only by their bounding planes.
//! Converts the parsed faces of an Id Tech 2 map into convex windings with
//! texture coordinates and per-brush bounding boxes.
//!
//! ## Architecture
//!
//! ```text
//! map-parser (RawFace) → map-convert (FaceDef) → brush-geometry (Winding)
//! ```
//!
//! ## Algorithms
//!
//! - **Clipping**: plane half-space clip of convex polygons
//! - **Reconstruction**: seed quad on each face plane, clipped by every sibling
//! - **Texturing**: axis-aligned planar projection with rotate/scale/shift
//!
//! ## Usage
//!
//! ```
//! use brush_geometry::{Brush, FaceDef, Vec3};
//! use config::constants::GeometryConfig;
//!
//! let config = GeometryConfig::default();
//! let face = |p: [[f64; 3]; 3]| FaceDef {
//!     points: p.map(Vec3::from_array),
//!     texture: "base/floor".into(),
//!     params: vec![0.0, 0.0, 0.0, 1.0, 1.0],
//! };
//! let defs = [
//!     face([[0.0, 0.0, 64.0], [0.0, 0.0, 0.0], [0.0, 64.0, 0.0]]),
//!     face([[64.0, 64.0, 0.0], [64.0, 0.0, 0.0], [64.0, 0.0, 64.0]]),
//!     face([[64.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 64.0]]),
//!     face([[0.0, 64.0, 64.0], [0.0, 64.0, 0.0], [64.0, 64.0, 0.0]]),
//!     face([[0.0, 64.0, 0.0], [0.0, 0.0, 0.0], [64.0, 0.0, 0.0]]),
//!     face([[64.0, 0.0, 64.0], [0.0, 0.0, 64.0], [0.0, 64.0, 64.0]]),
//! ];
//!
//! let mut brush = Brush::from_defs(&defs, &config).unwrap();
//! brush.reconstruct(&config).unwrap();
//! assert_eq!(brush.windings().count(), 6);
//! assert_eq!(brush.bounds().unwrap().maxs, Vec3::splat(64.0));
//! ```

pub mod bounds;
pub mod brush;
pub mod error;
pub mod map;
pub mod math;
pub mod plane;
pub mod texture;
pub mod winding;

pub use bounds::Bounds;
pub use brush::{build_face_winding, Brush, Face, FaceDef, FaceRejection};
pub use error::{FaceIssue, GeometryError, GeometryResult};
pub use map::{Entity, Map, ReconstructReport};
pub use math::{Vec2, Vec3};
pub use plane::{Plane, Side};
pub use texture::{project_uv, TexDef, TextureSize};
pub use winding::{Winding, WindingPoint};
