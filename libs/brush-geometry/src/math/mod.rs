//! Thin wrapper around `glam::DVec3` shared across geometry modules.
//!
//! The helpers mirror the vector vocabulary of the map format tools (dot,
//! cross, scale, multiply-add) while returning new values instead of writing
//! through output parameters.

pub use glam::{DVec2 as Vec2, DVec3 as Vec3};

/// Dot product of two vectors.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

/// Cross product of two vectors (right-hand rule).
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Scales a vector by a scalar.
#[inline]
pub fn scale(v: Vec3, s: f64) -> Vec3 {
    v * s
}

/// Component-wise sum.
#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Returns `a + s * b`.
///
/// Used to project a vector out of a plane:
/// `madd(v, -dot(v, n), n)` removes the `n` component of `v`.
///
/// # Examples
/// ```
/// use brush_geometry::math::{dot, madd, Vec3};
/// let v = Vec3::new(0.0, 1.0, 1.0);
/// let n = Vec3::Z;
/// let projected = madd(v, -dot(v, n), n);
/// assert_eq!(projected, Vec3::new(0.0, 1.0, 0.0));
/// ```
#[inline]
pub fn madd(a: Vec3, s: f64, b: Vec3) -> Vec3 {
    a + b * s
}

/// Normalizes a vector and returns it together with its original length.
///
/// A vector of length exactly zero is returned unchanged with length 0.
///
/// # Examples
/// ```
/// use brush_geometry::math::{normalize, Vec3};
/// let (n, len) = normalize(Vec3::new(3.0, 4.0, 0.0));
/// assert_eq!(len, 5.0);
/// assert!((n.length() - 1.0).abs() < 1e-12);
///
/// let (z, len) = normalize(Vec3::ZERO);
/// assert_eq!((z, len), (Vec3::ZERO, 0.0));
/// ```
pub fn normalize(v: Vec3) -> (Vec3, f64) {
    let length = v.length();
    if length == 0.0 {
        return (v, 0.0);
    }
    (v / length, length)
}

/// Component-wise equality within `epsilon`.
pub fn approximately_equal(a: Vec3, b: Vec3, epsilon: f64) -> bool {
    (0..3).all(|i| (a[i] - b[i]).abs() <= epsilon)
}

/// Snaps every component to the nearest integer, rounding halves up.
///
/// Map editors quantize plane points with `floor(x + 0.5)`; note that this
/// differs from `f64::round` for negative halves (`-0.5` snaps to `0`).
///
/// # Examples
/// ```
/// use brush_geometry::math::{snap_to_grid, Vec3};
/// let snapped = snap_to_grid(Vec3::new(0.5, -0.5, 1.49));
/// assert_eq!(snapped, Vec3::new(1.0, 0.0, 1.0));
/// ```
pub fn snap_to_grid(v: Vec3) -> Vec3 {
    (v + Vec3::splat(0.5)).floor()
}
