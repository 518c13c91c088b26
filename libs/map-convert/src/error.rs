//! # Conversion Errors
//!
//! ## Error Policy
//!
//! - `Parse`, `Io`, `Json` and `Reconstruct` abort the conversion
//! - `Geometry`, `MissingTexture` and `TextureRead` skip one brush and are
//!   recorded in the build output

use std::path::PathBuf;

use brush_geometry::{FaceIssue, GeometryError};
use map_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while converting a map.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A face could not be built; the brush is skipped.
    #[error("Invalid face: {0}")]
    Geometry(#[from] GeometryError),

    /// The texture file does not exist.
    #[error("Unable to find texture {}", .path.display())]
    MissingTexture { path: PathBuf },

    /// The texture file exists but its header could not be decoded.
    #[error("Unable to read texture {}: {source}", .path.display())]
    TextureRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Reconstruction hit an internal invariant violation.
    #[error("Reconstruction failed: {0}")]
    Reconstruct(#[from] FaceIssue),

    /// An exported mesh references a different number of points than it has.
    #[error("Mesh {mesh}: polygons reference {referenced} points but {control_points} exist")]
    PointCountMismatch {
        mesh: String,
        referenced: usize,
        control_points: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported output format '{0}' (expected obj or json)")]
    UnsupportedFormat(String),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors that only invalidate one brush.
    pub fn is_brush_level(&self) -> bool {
        matches!(
            self,
            Self::Geometry(_) | Self::MissingTexture { .. } | Self::TextureRead { .. }
        )
    }
}

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_texture_display() {
        let err = ConvertError::MissingTexture {
            path: PathBuf::from("textures/e1u1/floor1_3.tga"),
        };
        assert_eq!(
            err.to_string(),
            "Unable to find texture textures/e1u1/floor1_3.tga"
        );
        assert!(err.is_brush_level());
    }

    #[test]
    fn test_geometry_errors_convert() {
        let err: ConvertError = GeometryError::InvalidTexParams { count: 3 }.into();
        assert!(err.is_brush_level());
        assert!(err.to_string().contains("got 3"));
    }

    #[test]
    fn test_parse_error_is_fatal() {
        let err: ConvertError = ParseError::unexpected_eof("'}'").into();
        assert!(!err.is_brush_level());
    }
}
