//! Tests for winding seeding and half-space clipping.

use super::*;
use crate::math::normalize;
use approx::assert_relative_eq;

fn cfg() -> GeometryConfig {
    GeometryConfig::default()
}

/// 64x64 square on z = 0, counter-clockwise seen from +Z.
fn square() -> Winding {
    Winding::from_positions([
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(64.0, 0.0, 0.0),
        Vec3::new(64.0, 64.0, 0.0),
        Vec3::new(0.0, 64.0, 0.0),
    ])
}

fn positions(w: &Winding) -> Vec<Vec3> {
    w.positions().collect()
}

// =============================================================================
// BASE WINDING
// =============================================================================

#[test]
fn base_winding_lies_on_plane() {
    let normals = [
        Vec3::X,
        -Vec3::Y,
        Vec3::Z,
        normalize(Vec3::new(1.0, 2.0, 3.0)).0,
        normalize(Vec3::new(-0.3, 0.9, -0.1)).0,
    ];
    for normal in normals {
        let plane = Plane::new(normal, 48.0);
        let w = Winding::base_for_plane(&plane, &cfg()).unwrap();
        assert_eq!(w.len(), 4);
        for p in w.positions() {
            assert_relative_eq!(plane.distance_to(p), 0.0, epsilon = 1e-6);
        }
    }
}

#[test]
fn base_winding_order_reproduces_plane_normal() {
    for normal in [Vec3::X, -Vec3::Z, normalize(Vec3::new(2.0, -1.0, 0.5)).0] {
        let plane = Plane::new(normal, -16.0);
        let w = Winding::base_for_plane(&plane, &cfg()).unwrap();
        let p = positions(&w);
        let rebuilt = Plane::from_points(p[0], p[1], p[2], &cfg()).unwrap();
        assert_relative_eq!(dot(rebuilt.normal, normal), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn base_winding_covers_extent() {
    let w = Winding::base_for_plane(&Plane::new(Vec3::Z, 0.0), &cfg()).unwrap();
    let bounds = w.bounds();
    assert_eq!(bounds.mins, Vec3::new(-8192.0, -8192.0, 0.0));
    assert_eq!(bounds.maxs, Vec3::new(8192.0, 8192.0, 0.0));
}

#[test]
fn base_winding_rejects_nan_normal() {
    let err = Winding::base_for_plane(&Plane::new(Vec3::NAN, 0.0), &cfg()).unwrap_err();
    assert!(matches!(err, GeometryError::NoDominantAxis { .. }));
}

// =============================================================================
// CLIPPING
// =============================================================================

#[test]
fn clip_straddling_square_keeps_front_half() {
    let split = Plane::new(Vec3::X, 32.0);
    let clipped = square().clip(&split, false, &cfg()).unwrap().unwrap();

    assert_eq!(
        positions(&clipped),
        vec![
            Vec3::new(32.0, 0.0, 0.0),
            Vec3::new(64.0, 0.0, 0.0),
            Vec3::new(64.0, 64.0, 0.0),
            Vec3::new(32.0, 64.0, 0.0),
        ]
    );
    assert_eq!(clipped.capacity(), 4 + CLIP_CAPACITY_MARGIN);
}

#[test]
fn clip_behind_plane_removes_winding() {
    let split = Plane::new(Vec3::X, 100.0);
    assert!(square().clip(&split, false, &cfg()).unwrap().is_none());
}

#[test]
fn clip_in_front_of_plane_returns_input() {
    let split = Plane::new(Vec3::X, -10.0);
    let clipped = square().clip(&split, false, &cfg()).unwrap();
    assert_eq!(clipped, Some(square()));
}

#[test]
fn clip_coplanar_depends_on_keep_on() {
    let split = Plane::new(Vec3::Z, 0.0);
    assert_eq!(square().clip(&split, true, &cfg()).unwrap(), Some(square()));
    assert_eq!(square().clip(&split, false, &cfg()).unwrap(), None);
}

#[test]
fn clip_keeps_on_vertices_without_duplicates() {
    // Diagonal through (64, 0) and (0, 64), front side is x + y > 64
    let n = normalize(Vec3::new(1.0, 1.0, 0.0)).0;
    let split = Plane::new(n, dot(n, Vec3::new(64.0, 0.0, 0.0)));

    let clipped = square().clip(&split, false, &cfg()).unwrap().unwrap();
    assert_eq!(
        positions(&clipped),
        vec![
            Vec3::new(64.0, 0.0, 0.0),
            Vec3::new(64.0, 64.0, 0.0),
            Vec3::new(0.0, 64.0, 0.0),
        ]
    );
}

#[test]
fn clip_snaps_axis_aligned_crossings() {
    let triangle = Winding::from_positions([
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(100.0, 0.0, 0.0),
        Vec3::new(0.0, 30.0, 7.0),
    ]);
    // Keep x < 32
    let split = Plane::new(-Vec3::X, -32.0);
    let clipped = triangle.clip(&split, false, &cfg()).unwrap().unwrap();

    assert_eq!(clipped.len(), 4);
    let p = positions(&clipped);
    assert_eq!(p[1].x, 32.0);
    assert_eq!(p[2].x, 32.0);
    assert_relative_eq!(p[2].y, 20.4, epsilon = 1e-9);
    assert_relative_eq!(p[2].z, 4.76, epsilon = 1e-9);
}

#[test]
fn clip_adds_at_most_two_points() {
    let center = Vec3::new(32.0, 32.0, 0.0);
    let directions = [
        Vec3::new(1.0, 0.3, 0.0),
        Vec3::new(-0.2, 1.0, 0.1),
        Vec3::new(0.7, -0.7, 0.0),
        Vec3::new(-1.0, -0.4, 0.2),
    ];

    for dir in directions {
        let n = normalize(dir).0;
        let split = Plane::new(n, dot(n, center));
        let input = square();
        let count = input.len();
        let clipped = input.clip(&split, false, &cfg()).unwrap().unwrap();

        assert!(clipped.len() <= count + 2);
        assert!(clipped.is_valid());
        for p in clipped.positions() {
            assert!(split.distance_to(p) >= -cfg().on_epsilon);
        }
    }
}

#[test]
fn clip_rejects_oversized_input() {
    let config = GeometryConfig::new(0.01, 4).unwrap();
    let pentagon = Winding::from_positions([
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(3.0, 1.0, 0.0),
        Vec3::new(1.0, 3.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
    ]);

    let err = pentagon
        .clip(&Plane::new(Vec3::X, 1.0), false, &config)
        .unwrap_err();
    assert_eq!(err, GeometryError::capacity(5, 4));
    assert!(err.is_fatal());
}

// =============================================================================
// STORAGE
// =============================================================================

#[test]
fn push_past_capacity_fails() {
    let mut w = Winding::with_capacity(2);
    w.push(WindingPoint::new(Vec3::X)).unwrap();
    w.push(WindingPoint::new(Vec3::Y)).unwrap();

    let err = w.push(WindingPoint::new(Vec3::Z)).unwrap_err();
    assert_eq!(err, GeometryError::capacity(3, 2));
    assert_eq!(w.len(), 2);
    assert!(!w.is_valid());
}

#[test]
fn point_exports_five_tuple() {
    let point = WindingPoint {
        position: Vec3::new(1.0, 2.0, 3.0),
        uv: Vec2::new(0.25, 0.5),
    };
    assert_eq!(point.to_array(), [1.0, 2.0, 3.0, 0.25, 0.5]);
}
