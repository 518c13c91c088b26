//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilons_are_positive() {
    assert!(EQUAL_EPSILON > 0.0, "EQUAL_EPSILON must be positive");
    assert!(ON_EPSILON > 0.0, "ON_EPSILON must be positive");
}

#[test]
fn test_on_epsilon_thicker_than_equal_epsilon() {
    // Plane classification is deliberately coarser than vector equality
    assert!(ON_EPSILON > EQUAL_EPSILON);
}

#[test]
fn test_duplicate_thresholds_match_editor() {
    assert_eq!(DUPLICATE_NORMAL_DOT, 0.999);
    assert_eq!(DUPLICATE_DIST_EPSILON, 0.01);
}

// =============================================================================
// WINDING TESTS
// =============================================================================

#[test]
fn test_max_points_holds_clipped_quad() {
    // A seed quad plus the clip margin must always fit
    assert!(MAX_POINTS_ON_WINDING >= 4 + CLIP_CAPACITY_MARGIN);
}

#[test]
fn test_base_extent_inside_bogus_range() {
    // Corners of the seed quad reach extent * sqrt(2) on the diagonal
    assert!(BASE_WINDING_EXTENT * std::f64::consts::SQRT_2 < BOGUS_RANGE);
}

// =============================================================================
// TEXTURE TESTS
// =============================================================================

#[test]
fn test_tex_param_lengths() {
    assert_eq!(TEX_PARAMS_SHORT, 5);
    assert_eq!(TEX_PARAMS_LONG, TEX_PARAMS_SHORT + 3);
}

#[test]
fn test_texture_extension_has_no_dot() {
    assert!(!TEXTURE_EXTENSION.starts_with('.'));
}
