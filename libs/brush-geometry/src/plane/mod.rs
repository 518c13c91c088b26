//! # Plane
//!
//! Infinite plane with point classification.
//!
//! The plane equation is `dot(normal, point) = dist`. Points with a positive
//! signed distance lie in front of the plane, i.e. outside the brush when the
//! plane bounds a brush face.

use crate::error::{GeometryError, GeometryResult};
use crate::math::{approximately_equal, cross, dot, normalize, subtract, Vec3};
use config::constants::{GeometryConfig, BOGUS_RANGE};
use serde::{Deserialize, Serialize};

// =============================================================================
// SIDE
// =============================================================================

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Signed distance above the plane thickness.
    Front,
    /// Signed distance below the negated plane thickness.
    Back,
    /// Within the plane thickness, bounds included.
    On,
}

impl Side {
    /// Classifies a signed distance against a plane thickness.
    ///
    /// # Examples
    /// ```
    /// use brush_geometry::plane::Side;
    /// assert_eq!(Side::from_distance(0.01, 0.01), Side::On);
    /// assert_eq!(Side::from_distance(0.02, 0.01), Side::Front);
    /// ```
    #[inline]
    pub fn from_distance(distance: f64, epsilon: f64) -> Self {
        if distance > epsilon {
            Side::Front
        } else if distance < -epsilon {
            Side::Back
        } else {
            Side::On
        }
    }
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane in 3D space defined by a unit normal and distance from origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal, pointing out of the brush for face planes.
    pub normal: Vec3,
    /// `dot(normal, point)` for any point on the plane.
    pub dist: f64,
}

impl Plane {
    /// Create plane from normal and distance.
    pub fn new(normal: Vec3, dist: f64) -> Self {
        Self { normal, dist }
    }

    /// Create plane from three ordered points.
    ///
    /// The normal is `cross(p0 - p1, p2 - p1)` normalized, so the winding order
    /// of the points decides which side is the front.
    ///
    /// # Errors
    /// `DegeneratePlane` when the cross product is the zero vector within
    /// `config.equal_epsilon` (collinear or coincident points).
    ///
    /// # Examples
    /// ```
    /// use brush_geometry::plane::Plane;
    /// use brush_geometry::math::Vec3;
    /// use config::constants::GeometryConfig;
    ///
    /// let plane = Plane::from_points(
    ///     Vec3::new(64.0, 0.0, 16.0),
    ///     Vec3::new(0.0, 0.0, 16.0),
    ///     Vec3::new(0.0, 64.0, 16.0),
    ///     &GeometryConfig::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(plane.normal, Vec3::Z);
    /// assert_eq!(plane.dist, 16.0);
    /// ```
    pub fn from_points(
        p0: Vec3,
        p1: Vec3,
        p2: Vec3,
        config: &GeometryConfig,
    ) -> GeometryResult<Self> {
        let e1 = subtract(p0, p1);
        let e2 = subtract(p2, p1);
        let normal = cross(e1, e2);
        if approximately_equal(normal, Vec3::ZERO, config.equal_epsilon) {
            return Err(GeometryError::DegeneratePlane {
                points: [p0, p1, p2],
            });
        }

        let (normal, _) = normalize(normal);
        Ok(Self {
            normal,
            dist: dot(p1, normal),
        })
    }

    /// Same plane facing the other way.
    pub fn flip(&self) -> Plane {
        Plane {
            normal: -self.normal,
            dist: -self.dist,
        }
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = front, negative = back, zero = on plane.
    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f64 {
        dot(point, self.normal) - self.dist
    }

    /// Classify a point relative to this plane.
    pub fn classify(&self, point: Vec3, epsilon: f64) -> Side {
        Side::from_distance(self.distance_to(point), epsilon)
    }

    /// Returns true when both planes face the same way and sit at the same
    /// distance, within the duplicate-plane tolerances.
    pub fn is_coincident(&self, other: &Plane, config: &GeometryConfig) -> bool {
        dot(self.normal, other.normal) > config.duplicate_normal_dot
            && (self.dist - other.dist).abs() < config.duplicate_dist_epsilon
    }

    /// Index of the axis with the largest absolute normal component.
    ///
    /// The first maximal axis wins. `None` only for a NaN normal.
    pub fn dominant_axis(&self) -> Option<usize> {
        let mut best = -BOGUS_RANGE;
        let mut axis = None;
        for i in 0..3 {
            let v = self.normal[i].abs();
            if v > best {
                best = v;
                axis = Some(i);
            }
        }
        axis
    }
}
