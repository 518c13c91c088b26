//! Axis-aligned bounding box accumulated over winding points.

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Component-wise min/max box.
///
/// An empty box has `mins = +inf` and `maxs = -inf`, so the first added
/// point sets both corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub mins: Vec3,
    pub maxs: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    /// A box containing nothing.
    pub fn empty() -> Self {
        Self {
            mins: Vec3::splat(f64::INFINITY),
            maxs: Vec3::splat(f64::NEG_INFINITY),
        }
    }

    /// Returns true until a point has been added.
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.mins[i] > self.maxs[i])
    }

    /// Grows the box to contain `point`.
    pub fn add_point(&mut self, point: Vec3) {
        self.mins = self.mins.min(point);
        self.maxs = self.maxs.max(point);
    }

    /// Smallest box containing both.
    ///
    /// # Examples
    /// ```
    /// use brush_geometry::bounds::Bounds;
    /// use brush_geometry::math::Vec3;
    ///
    /// let a = Bounds::from_points([Vec3::ZERO]);
    /// let b = Bounds::from_points([Vec3::splat(4.0)]);
    /// let u = a.union(&b);
    /// assert_eq!((u.mins, u.maxs), (Vec3::ZERO, Vec3::splat(4.0)));
    /// assert_eq!(Bounds::empty().union(&a), a);
    /// ```
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            mins: self.mins.min(other.mins),
            maxs: self.maxs.max(other.maxs),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.add_point(p);
        }
        bounds
    }

    /// Size along each axis, zero for an empty box.
    pub fn extent(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.maxs - self.mins
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bounds() {
        let b = Bounds::empty();
        assert!(b.is_empty());
        assert_eq!(b.extent(), Vec3::ZERO);
        assert_eq!(Bounds::default(), b);
    }

    #[test]
    fn test_single_point_sets_both_corners() {
        let p = Vec3::new(-3.0, 7.0, 12.0);
        let b = Bounds::from_points([p]);
        assert!(!b.is_empty());
        assert_eq!(b.mins, p);
        assert_eq!(b.maxs, p);
    }

    #[test]
    fn test_add_point_is_component_wise() {
        let b = Bounds::from_points([
            Vec3::new(0.0, 10.0, -5.0),
            Vec3::new(8.0, -2.0, 3.0),
            Vec3::new(4.0, 4.0, 4.0),
        ]);
        assert_eq!(b.mins, Vec3::new(0.0, -2.0, -5.0));
        assert_eq!(b.maxs, Vec3::new(8.0, 10.0, 4.0));
        assert_eq!(b.extent(), Vec3::new(8.0, 12.0, 9.0));
    }
}
