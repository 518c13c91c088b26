//! # Winding
//!
//! Bounded convex polygon used both as clipping input/output and as the final
//! face geometry.
//!
//! ## Contents
//!
//! - **Data structures**: `Winding`, `WindingPoint`
//! - **Seeding**: `Winding::base_for_plane` lays a huge quad on a plane
//! - **Clipping**: `Winding::clip` keeps the front half-space of a plane
//!
//! Consecutive points are connected edges and the last point connects back
//! to the first.

use crate::bounds::Bounds;
use crate::error::{GeometryError, GeometryResult};
use crate::math::{add, cross, dot, madd, normalize, scale, subtract, Vec2, Vec3};
use crate::plane::{Plane, Side};
use config::constants::{GeometryConfig, CLIP_CAPACITY_MARGIN};

// =============================================================================
// WINDING POINT
// =============================================================================

/// One polygon vertex: position plus texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindingPoint {
    /// Position in map units.
    pub position: Vec3,
    /// Texture coordinates, zero until projected.
    pub uv: Vec2,
}

impl WindingPoint {
    /// Create a point with zeroed texture coordinates.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            uv: Vec2::ZERO,
        }
    }

    /// The `(x, y, z, s, t)` tuple.
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.uv.x,
            self.uv.y,
        ]
    }
}

// =============================================================================
// WINDING
// =============================================================================

/// An ordered, capacity-bounded list of polygon points.
///
/// ## Invariants
///
/// - `points.len() <= capacity`
/// - A winding is valid (renderable) only with at least 3 points
#[derive(Debug, Clone, PartialEq)]
pub struct Winding {
    points: Vec<WindingPoint>,
    capacity: usize,
}

impl Winding {
    /// Creates an empty winding that accepts up to `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a winding holding exactly the given positions.
    ///
    /// # Examples
    /// ```
    /// use brush_geometry::winding::Winding;
    /// use brush_geometry::math::Vec3;
    ///
    /// let w = Winding::from_positions([Vec3::ZERO, Vec3::X, Vec3::Y]);
    /// assert_eq!(w.len(), 3);
    /// assert!(w.is_valid());
    /// ```
    pub fn from_positions(positions: impl IntoIterator<Item = Vec3>) -> Self {
        let points: Vec<WindingPoint> = positions.into_iter().map(WindingPoint::new).collect();
        let capacity = points.len();
        Self { points, capacity }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the winding has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true when the winding forms a polygon (3 or more points).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    /// Maximum number of points this winding accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points in edge order.
    #[inline]
    pub fn points(&self) -> &[WindingPoint] {
        &self.points
    }

    /// Mutable points, used to write texture coordinates.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [WindingPoint] {
        &mut self.points
    }

    /// Positions in edge order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().map(|p| p.position)
    }

    /// Appends a point.
    ///
    /// # Errors
    /// `CapacityExceeded` when the winding is already full; nothing is
    /// truncated.
    pub fn push(&mut self, point: WindingPoint) -> GeometryResult<()> {
        if self.points.len() >= self.capacity {
            return Err(GeometryError::capacity(self.points.len() + 1, self.capacity));
        }
        self.points.push(point);
        Ok(())
    }

    /// Axis-aligned bounds of all points.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(self.positions())
    }

    /// Lays a quad of half-extent `config.base_extent` on the plane.
    ///
    /// The quad's edge vectors are derived from the plane's dominant axis:
    /// `up` starts as +Z (dominant X or Y) or +X (dominant Z), is made
    /// orthogonal to the normal, and `right = cross(up, normal)`.
    ///
    /// # Errors
    /// `NoDominantAxis` when the normal is NaN.
    ///
    /// # Examples
    /// ```
    /// use brush_geometry::plane::Plane;
    /// use brush_geometry::winding::Winding;
    /// use brush_geometry::math::Vec3;
    /// use config::constants::GeometryConfig;
    ///
    /// let w = Winding::base_for_plane(&Plane::new(Vec3::Z, 32.0), &GeometryConfig::default()).unwrap();
    /// assert_eq!(w.len(), 4);
    /// assert!(w.positions().all(|p| p.z == 32.0));
    /// ```
    pub fn base_for_plane(plane: &Plane, config: &GeometryConfig) -> GeometryResult<Self> {
        let axis = plane
            .dominant_axis()
            .ok_or(GeometryError::NoDominantAxis {
                normal: plane.normal,
            })?;

        let up = if axis == 2 { Vec3::X } else { Vec3::Z };
        let v = dot(up, plane.normal);
        let (up, _) = normalize(madd(up, -v, plane.normal));

        let origin = scale(plane.normal, plane.dist);
        let right = cross(up, plane.normal);

        let up = scale(up, config.base_extent);
        let right = scale(right, config.base_extent);

        Ok(Self::from_positions([
            add(subtract(origin, right), up),
            add(add(origin, right), up),
            subtract(add(origin, right), up),
            subtract(subtract(origin, right), up),
        ]))
    }

    /// Clips the winding to the front half-space of `split`.
    ///
    /// ## Algorithm
    ///
    /// 1. Classify each point as front, back or on (inclusive plane thickness)
    /// 2. Everything on the plane: keep the input if `keep_on` is set
    /// 3. Nothing in front: the polygon is clipped away (`None`)
    /// 4. Nothing behind: the input is returned unchanged
    /// 5. Otherwise walk the edges, keeping on/front points and inserting the
    ///    crossing point of every edge that goes front to back or back to front
    ///
    /// Crossing coordinates on axes where the split normal is exactly `±1` are
    /// snapped to `±dist` to avoid round-off on axis-aligned cuts.
    ///
    /// # Errors
    /// `CapacityExceeded` when the input holds more than `config.max_points`
    /// or the clipped polygon outgrows `len + CLIP_CAPACITY_MARGIN`.
    pub fn clip(
        self,
        split: &Plane,
        keep_on: bool,
        config: &GeometryConfig,
    ) -> GeometryResult<Option<Winding>> {
        let count = self.points.len();
        if count > config.max_points {
            return Err(GeometryError::capacity(count, config.max_points));
        }

        let mut dists = Vec::with_capacity(count + 1);
        let mut sides = Vec::with_capacity(count + 1);
        let mut front = 0;
        let mut back = 0;

        for point in &self.points {
            let d = split.distance_to(point.position);
            let side = Side::from_distance(d, config.on_epsilon);
            match side {
                Side::Front => front += 1,
                Side::Back => back += 1,
                Side::On => {}
            }
            dists.push(d);
            sides.push(side);
        }

        if keep_on && front == 0 && back == 0 {
            return Ok(Some(self));
        }
        if front == 0 {
            return Ok(None);
        }
        if back == 0 {
            return Ok(Some(self));
        }

        // close the loop
        dists.push(dists[0]);
        sides.push(sides[0]);

        let mut clipped = Winding::with_capacity(count + CLIP_CAPACITY_MARGIN);
        for i in 0..count {
            let p1 = self.points[i];

            match sides[i] {
                Side::On => {
                    clipped.push(p1)?;
                    continue;
                }
                Side::Front => clipped.push(p1)?,
                Side::Back => {}
            }

            if sides[i + 1] == Side::On || sides[i + 1] == sides[i] {
                continue;
            }

            let p2 = self.points[(i + 1) % count];
            let t = dists[i] / (dists[i] - dists[i + 1]);
            let mid = crossing_point(p1.position, p2.position, t, split);
            clipped.push(WindingPoint::new(mid))?;
        }

        Ok(Some(clipped))
    }
}

/// Point at fraction `t` along `p1 -> p2`, exact on axis-aligned splits.
fn crossing_point(p1: Vec3, p2: Vec3, t: f64, split: &Plane) -> Vec3 {
    let mut mid = Vec3::ZERO;
    for axis in 0..3 {
        mid[axis] = if split.normal[axis] == 1.0 {
            split.dist
        } else if split.normal[axis] == -1.0 {
            -split.dist
        } else {
            p1[axis] + t * (p2[axis] - p1[axis])
        };
    }
    mid
}

#[cfg(test)]
mod tests;
