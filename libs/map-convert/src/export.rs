//! # Scene Export
//!
//! One node per brush holding a polygon mesh: the face windings'
//! points concatenated as control points, one polygon per face.
//!
//! Nodes are named `brushNode{N}` with mesh `brushMesh{N}`, where `N` counts
//! brushes across all entities in file order. Brushes without any polygon
//! produce no node.

use std::path::Path;

use brush_geometry::{Bounds, Brush, Map};
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

// =============================================================================
// OUTPUT FORMAT
// =============================================================================

/// Serialization target for an [`ExportScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Wavefront OBJ text.
    Obj,
    /// The scene structure as JSON.
    Json,
}

impl OutputFormat {
    /// Parses `obj` or `json`, ignoring case.
    pub fn from_name(name: &str) -> ConvertResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "obj" => Ok(Self::Obj),
            "json" => Ok(Self::Json),
            _ => Err(ConvertError::UnsupportedFormat(name.to_string())),
        }
    }

    /// Format implied by the file extension.
    pub fn from_path(path: &Path) -> ConvertResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_name(ext)
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// Polygon mesh of one brush.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportMesh {
    pub name: String,
    pub control_points: Vec<[f64; 3]>,
    /// Texture coordinates, parallel to `control_points`.
    pub uvs: Vec<[f64; 2]>,
    /// Indices into `control_points`, one list per face.
    pub polygons: Vec<Vec<usize>>,
}

impl ExportMesh {
    fn from_brush(name: String, brush: &Brush) -> Self {
        let mut mesh = ExportMesh {
            name,
            ..ExportMesh::default()
        };
        for winding in brush.windings() {
            let start = mesh.control_points.len();
            for point in winding.points() {
                let [x, y, z, s, t] = point.to_array();
                mesh.control_points.push([x, y, z]);
                mesh.uvs.push([s, t]);
            }
            mesh.polygons.push((start..mesh.control_points.len()).collect());
        }
        mesh
    }

    /// Checks that the polygons reference every control point exactly once
    /// in order.
    pub fn validate(&self) -> ConvertResult<()> {
        let referenced: usize = self.polygons.iter().map(Vec::len).sum();
        if referenced != self.control_points.len() || self.uvs.len() != referenced {
            return Err(ConvertError::PointCountMismatch {
                mesh: self.name.clone(),
                referenced,
                control_points: self.control_points.len(),
            });
        }
        Ok(())
    }
}

/// A brush placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    pub name: String,
    /// Classname of the owning entity.
    pub classname: Option<String>,
    pub bounds: Bounds,
    pub mesh: ExportMesh,
}

/// Every exported brush.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportScene {
    pub nodes: Vec<ExportNode>,
}

impl ExportScene {
    /// Builds the scene from a reconstructed map.
    ///
    /// # Errors
    /// `PointCountMismatch` when a mesh is inconsistent.
    pub fn from_map(map: &Map) -> ConvertResult<Self> {
        let mut nodes = Vec::new();
        for (index, (e, _, brush)) in map.brushes().enumerate() {
            let Some(bounds) = brush.bounds() else {
                continue;
            };
            let mesh = ExportMesh::from_brush(format!("brushMesh{index}"), brush);
            mesh.validate()?;
            nodes.push(ExportNode {
                name: format!("brushNode{index}"),
                classname: map.entities[e].classname().map(str::to_string),
                bounds,
                mesh,
            });
        }
        Ok(Self { nodes })
    }

    /// Total control points across nodes.
    pub fn point_count(&self) -> usize {
        self.nodes.iter().map(|n| n.mesh.control_points.len()).sum()
    }

    pub fn polygon_count(&self) -> usize {
        self.nodes.iter().map(|n| n.mesh.polygons.len()).sum()
    }

    pub fn to_json(&self) -> ConvertResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Wavefront OBJ text, one object per node.
    ///
    /// Polygons keep winding order; `v` and `vt` indices are shared.
    pub fn to_obj(&self) -> String {
        let mut out = String::new();
        let mut base = 1;
        for node in &self.nodes {
            out.push_str(&format!("o {}\n", node.name));
            for [x, y, z] in &node.mesh.control_points {
                out.push_str(&format!("v {x} {y} {z}\n"));
            }
            for [s, t] in &node.mesh.uvs {
                out.push_str(&format!("vt {s} {t}\n"));
            }
            for polygon in &node.mesh.polygons {
                let refs: Vec<String> = polygon
                    .iter()
                    .map(|i| format!("{0}/{0}", base + i))
                    .collect();
                out.push_str(&format!("f {}\n", refs.join(" ")));
            }
            base += node.mesh.control_points.len();
        }
        out
    }

    /// Serializes the scene in `format`.
    pub fn render(&self, format: OutputFormat) -> ConvertResult<String> {
        match format {
            OutputFormat::Obj => Ok(self.to_obj()),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// Writes the scene to `path`.
    pub fn write(&self, path: &Path, format: OutputFormat) -> ConvertResult<()> {
        let text = self.render(format)?;
        std::fs::write(path, text).map_err(|e| ConvertError::io(path, e))
    }
}
