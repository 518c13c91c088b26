//! # Geometry Errors
//!
//! Error types for face reconstruction.
//!
//! ## Error Policy
//!
//! - Face-level failures are recorded and the face emits no polygon
//! - Brush-level failures skip the brush, sibling brushes continue
//! - `CapacityExceeded` is an internal invariant violation and aborts the run

use crate::math::Vec3;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building planes and windings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The three defining points are collinear or coincident.
    #[error("Degenerate plane: points {points:?} do not span a plane")]
    DegeneratePlane {
        /// Snapped defining points.
        points: [Vec3; 3],
    },

    /// A sibling face repeats this face's plane after it in storage order.
    #[error("Duplicate plane: face {duplicate} repeats the plane of face {face}")]
    DuplicatePlaneConflict {
        /// Face being reconstructed.
        face: usize,
        /// Later face carrying the same plane.
        duplicate: usize,
    },

    /// Clipping left fewer than three points.
    ///
    /// A count of zero means a clip removed the polygon entirely.
    #[error("Degenerate winding: {points} points remain after clipping")]
    DegenerateWinding {
        /// Points remaining after clipping.
        points: usize,
    },

    /// A winding grew past its allocated capacity.
    #[error("Winding capacity exceeded: {count} points (capacity: {capacity})")]
    CapacityExceeded {
        /// Number of points requested.
        count: usize,
        /// Allocated capacity.
        capacity: usize,
    },

    /// The plane normal has no measurable component (NaN).
    #[error("No dominant axis for normal {normal:?}")]
    NoDominantAxis {
        /// Offending normal.
        normal: Vec3,
    },

    /// The texture parameter list is neither 5 nor 8 values long.
    #[error("Invalid texture parameters: expected 5 or 8 values, got {count}")]
    InvalidTexParams {
        /// Number of values supplied.
        count: usize,
    },
}

impl GeometryError {
    /// Creates a capacity error.
    pub fn capacity(count: usize, capacity: usize) -> Self {
        Self::CapacityExceeded { count, capacity }
    }

    /// Returns true when the error must abort reconstruction instead of
    /// being recorded against a single face.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    /// Returns true for the expected "face has no visible geometry" outcome.
    pub fn is_unused_plane(&self) -> bool {
        matches!(self, Self::DegenerateWinding { .. })
    }
}

/// A face-level failure located inside a map.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("entity {entity}, brush {brush}, face {face}: {error}")]
pub struct FaceIssue {
    /// Entity index in the map.
    pub entity: usize,
    /// Brush index in the entity.
    pub brush: usize,
    /// Face index in the brush.
    pub face: usize,
    /// What went wrong.
    #[source]
    pub error: GeometryError,
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::capacity(70, 68);
        assert!(err.to_string().contains("70"));
        assert!(err.to_string().contains("68"));

        let err = GeometryError::InvalidTexParams { count: 6 };
        assert!(err.to_string().contains("got 6"));
    }

    #[test]
    fn test_only_capacity_is_fatal() {
        assert!(GeometryError::capacity(1, 0).is_fatal());
        assert!(!GeometryError::DegenerateWinding { points: 2 }.is_fatal());
        assert!(!GeometryError::DuplicatePlaneConflict { face: 0, duplicate: 1 }.is_fatal());
    }

    #[test]
    fn test_face_issue_carries_location() {
        let issue = FaceIssue {
            entity: 3,
            brush: 1,
            face: 4,
            error: GeometryError::DegenerateWinding { points: 0 },
        };
        let msg = issue.to_string();
        assert!(msg.starts_with("entity 3, brush 1, face 4"));
        assert!(std::error::Error::source(&issue).is_some());
    }

    /// Test error types are Send + Sync for parallel reconstruction.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
        assert_send_sync::<FaceIssue>();
    }
}
